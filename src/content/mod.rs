//! Static bilingual copy for every section of the portfolio.
//!
//! Each language is a complete [`Content`] tree. Lists whose length is fixed by
//! the layout are arrays, so both trees are forced to the same shape at compile
//! time; the remaining variable-length lists are checked by the tests below.

mod ar;
mod en;
pub mod profile;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Ar];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "ar" => Some(Language::Ar),
            _ => None,
        }
    }

    pub fn direction(self) -> TextDirection {
        match self {
            Language::Ar => TextDirection::Rtl,
            Language::En => TextDirection::Ltr,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn attr(self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }

    pub fn is_rtl(self) -> bool {
        self == TextDirection::Rtl
    }
}

/// Navigation targets of the single-page layout, in page order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    About,
    Services,
    Achievements,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Services,
        Section::Achievements,
        Section::Projects,
        Section::Contact,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Services => "services",
            Section::Achievements => "achievements",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug)]
pub struct Content {
    pub nav: NavLabels,
    pub hero: Hero,
    pub about: About,
    pub services: Services,
    pub achievements: Achievements,
    pub projects: Projects,
    pub contact: Contact,
    pub footer: Footer,
    pub toasts: Toasts,
    pub chrome: Chrome,
}

#[derive(Debug)]
pub struct NavLabels {
    pub home: &'static str,
    pub about: &'static str,
    pub services: &'static str,
    pub achievements: &'static str,
    pub projects: &'static str,
    pub contact: &'static str,
}

impl NavLabels {
    pub fn label(&self, section: Section) -> &'static str {
        match section {
            Section::Home => self.home,
            Section::About => self.about,
            Section::Services => self.services,
            Section::Achievements => self.achievements,
            Section::Projects => self.projects,
            Section::Contact => self.contact,
        }
    }
}

#[derive(Debug)]
pub struct Hero {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub cta: &'static str,
    pub cta_secondary: &'static str,
}

#[derive(Debug)]
pub struct About {
    pub title: &'static str,
    pub description: &'static str,
    pub biography: &'static str,
    pub skills: &'static str,
    pub download_cv: &'static str,
    pub view_profile: &'static str,
}

#[derive(Debug)]
pub struct Services {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub items: [Service; 3],
}

#[derive(Debug)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 4],
}

#[derive(Debug)]
pub struct Achievements {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub items: [Achievement; 3],
}

#[derive(Debug)]
pub struct Achievement {
    pub platform: &'static str,
    pub description: &'static str,
    pub year: &'static str,
}

#[derive(Debug)]
pub struct Projects {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub items: [Project; 3],
}

#[derive(Debug)]
pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub link: &'static str,
}

#[derive(Debug)]
pub struct Contact {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub form: FormLabels,
    pub info: ContactInfo,
}

#[derive(Debug)]
pub struct FormLabels {
    pub name: &'static str,
    pub email: &'static str,
    pub subject: &'static str,
    pub message: &'static str,
    pub send: &'static str,
    pub sending: &'static str,
}

#[derive(Debug)]
pub struct ContactInfo {
    pub email: &'static str,
    pub location: &'static str,
    pub phone: &'static str,
}

#[derive(Debug)]
pub struct Footer {
    pub rights: &'static str,
}

#[derive(Debug)]
pub struct Toasts {
    pub sent_title: &'static str,
    pub sent_description: &'static str,
    pub failed_title: &'static str,
    pub failed_description: &'static str,
    pub invalid_title: &'static str,
    pub invalid_description: &'static str,
}

/// Labels for the terminal chrome around the page itself.
#[derive(Debug)]
pub struct Chrome {
    pub switch_language: &'static str,
    pub theme_light: &'static str,
    pub theme_dark: &'static str,
    pub menu_title: &'static str,
    pub audio_title: &'static str,
    pub hints_browse: &'static str,
    pub hints_edit: &'static str,
}

pub fn content(language: Language) -> &'static Content {
    match language {
        Language::En => &en::EN,
        Language::Ar => &ar::AR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(c: &Content) -> Vec<&'static str> {
        let mut out = vec![
            c.nav.home,
            c.nav.about,
            c.nav.services,
            c.nav.achievements,
            c.nav.projects,
            c.nav.contact,
            c.hero.title,
            c.hero.subtitle,
            c.hero.description,
            c.hero.cta,
            c.hero.cta_secondary,
            c.about.title,
            c.about.description,
            c.about.biography,
            c.about.skills,
            c.about.download_cv,
            c.about.view_profile,
            c.services.title,
            c.services.subtitle,
            c.achievements.title,
            c.achievements.subtitle,
            c.projects.title,
            c.projects.subtitle,
            c.contact.title,
            c.contact.subtitle,
            c.contact.form.name,
            c.contact.form.email,
            c.contact.form.subject,
            c.contact.form.message,
            c.contact.form.send,
            c.contact.form.sending,
            c.contact.info.email,
            c.contact.info.location,
            c.contact.info.phone,
            c.footer.rights,
            c.toasts.sent_title,
            c.toasts.sent_description,
            c.toasts.failed_title,
            c.toasts.failed_description,
            c.toasts.invalid_title,
            c.toasts.invalid_description,
            c.chrome.switch_language,
            c.chrome.theme_light,
            c.chrome.theme_dark,
            c.chrome.menu_title,
            c.chrome.audio_title,
            c.chrome.hints_browse,
            c.chrome.hints_edit,
        ];
        for s in &c.services.items {
            out.extend([s.title, s.description]);
            out.extend(s.features);
        }
        for a in &c.achievements.items {
            out.extend([a.platform, a.description, a.year]);
        }
        for p in &c.projects.items {
            out.extend([p.name, p.description, p.link]);
            out.extend(p.tech);
        }
        out
    }

    #[test]
    fn trees_share_shape() {
        let en = content(Language::En);
        let ar = content(Language::Ar);

        assert_eq!(strings(en).len(), strings(ar).len());
        for (e, a) in en.projects.items.iter().zip(&ar.projects.items) {
            assert_eq!(e.tech.len(), a.tech.len(), "tech tags of {}", e.name);
        }
    }

    #[test]
    fn no_empty_copy() {
        for language in Language::ALL {
            for s in strings(content(language)) {
                assert!(!s.trim().is_empty(), "empty string in {:?}", language);
            }
        }
    }

    #[test]
    fn project_links_match_across_languages() {
        let en = content(Language::En);
        let ar = content(Language::Ar);
        for (e, a) in en.projects.items.iter().zip(&ar.projects.items) {
            assert_eq!(e.link, a.link);
        }
    }

    #[test]
    fn language_codes_round_trip() {
        for language in Language::ALL {
            assert_eq!(Language::from_code(language.code()), Some(language));
        }
        assert_eq!(Language::from_code(" AR "), Some(Language::Ar));
        assert_eq!(Language::from_code("fr"), None);
    }

    #[test]
    fn only_arabic_is_rtl() {
        assert_eq!(Language::Ar.direction().attr(), "rtl");
        assert_eq!(Language::En.direction().attr(), "ltr");
        assert_eq!(Language::En.toggled(), Language::Ar);
        assert_eq!(Language::Ar.toggled(), Language::En);
    }

    #[test]
    fn sections_cycle_in_page_order() {
        assert_eq!(Section::Home.previous(), Section::Contact);
        assert_eq!(Section::Contact.next(), Section::Home);
        assert_eq!(Section::from_index(4), Some(Section::Projects));
        assert_eq!(Section::from_index(6), None);
        assert_eq!(content(Language::En).nav.label(Section::Projects), "Projects");
    }
}
