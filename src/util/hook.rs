use tracing::error;

use crate::ui::tui;

/// Puts the terminal back before the default report is printed, so the panic
/// message isn't swallowed by the alternate screen.
pub fn set_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        if let Err(e) = tui::Tui::restore() {
            error!(error = %e, "terminal_restore_failed");
        }
        error!(panic = %panic_info, "panic");
        hook(panic_info);
    }));
}
