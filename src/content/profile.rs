//! Profile data shared by both languages.

pub const BRAND: &str = "SilentTrack";

pub const EMAIL: &str = "ali@silenttrack.com";

pub const INSTAGRAM_URL: &str = "https://www.instagram.com/awsi5";

pub const GITHUB_URL: &str = "https://github.com/awsi";

pub const CV_PATH: &str = "/cv.pdf";

pub const SKILLS: [&str; 6] = [
    "Penetration Testing",
    "Vulnerability Assessment",
    "Web Application Security",
    "Network Security",
    "Bug Bounty Hunting",
    "Security Consulting",
];
