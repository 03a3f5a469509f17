use super::{
    About, Achievement, Achievements, Chrome, Contact, ContactInfo, Content, Footer, FormLabels,
    Hero, NavLabels, Project, Projects, Service, Services, Toasts,
};

pub(super) static EN: Content = Content {
    nav: NavLabels {
        home: "Home",
        about: "About",
        services: "Services",
        achievements: "Achievements",
        projects: "Projects",
        contact: "Contact",
    },
    hero: Hero {
        title: "Ali Bahaa Alawsi",
        subtitle: "Cybersecurity Expert & Vulnerability Researcher",
        description: "Specialized in penetration testing, vulnerability assessment, and security consulting. Recognized by major tech companies for discovering critical security flaws.",
        cta: "Request Security Assessment",
        cta_secondary: "View Portfolio",
    },
    about: About {
        title: "About Me",
        description: "Dedicated cybersecurity professional with expertise in vulnerability research and ethical hacking.",
        biography: "Iraqi security researcher with a passion for uncovering vulnerabilities and strengthening digital security. Featured in Meta's WhiteHat program and recognized by Pinterest for discovering critical security flaws. Committed to making the digital world safer through ethical hacking and responsible disclosure.",
        skills: "Core Expertise",
        download_cv: "Download CV",
        view_profile: "View Instagram Profile",
    },
    services: Services {
        title: "Security Services",
        subtitle: "Professional cybersecurity solutions tailored to your needs",
        items: [
            Service {
                title: "Penetration Testing",
                description: "Comprehensive security assessments to identify vulnerabilities before attackers do.",
                features: [
                    "Web Application Testing",
                    "Network Security Assessment",
                    "Social Engineering Tests",
                    "Detailed Reporting",
                ],
            },
            Service {
                title: "Vulnerability Assessment",
                description: "Systematic evaluation of security weaknesses in your digital infrastructure.",
                features: [
                    "Automated Scanning",
                    "Manual Verification",
                    "Risk Prioritization",
                    "Remediation Guidance",
                ],
            },
            Service {
                title: "Security Consulting",
                description: "Expert guidance on security strategy, compliance, and best practices.",
                features: [
                    "Security Architecture Review",
                    "Compliance Assessment",
                    "Training & Awareness",
                    "Incident Response Planning",
                ],
            },
        ],
    },
    achievements: Achievements {
        title: "Recognition & Achievements",
        subtitle: "Acknowledged by leading tech companies for security research",
        items: [
            Achievement {
                platform: "Meta (Facebook)",
                description: "Listed in Meta's WhiteHat program for discovering critical vulnerabilities",
                year: "2023",
            },
            Achievement {
                platform: "Pinterest",
                description: "Featured for identifying and responsibly disclosing security flaws",
                year: "2023",
            },
            Achievement {
                platform: "Bug Bounty Programs",
                description: "Active participant in various bug bounty programs with successful findings",
                year: "Ongoing",
            },
        ],
    },
    projects: Projects {
        title: "Tools & Projects",
        subtitle: "Security tools and research projects developed",
        items: [
            Project {
                name: "Security Scanner Bot",
                description: "Automated vulnerability scanning bot for Telegram",
                tech: &["Python", "Telegram API", "Security Tools"],
                link: "https://t.me/awsi_bot",
            },
            Project {
                name: "Web Security Tools",
                description: "Collection of custom security testing tools",
                tech: &["Python", "JavaScript", "Bash"],
                link: "https://github.com/awsi",
            },
            Project {
                name: "Research Reports",
                description: "Published security research and vulnerability reports",
                tech: &["Security Research", "Documentation"],
                link: "#",
            },
        ],
    },
    contact: Contact {
        title: "Get In Touch",
        subtitle: "Ready to secure your digital assets? Let's discuss your security needs.",
        form: FormLabels {
            name: "Full Name",
            email: "Email Address",
            subject: "Subject",
            message: "Message",
            send: "Send Message",
            sending: "Sending...",
        },
        info: ContactInfo {
            email: "Contact Email",
            location: "Baghdad, Iraq",
            phone: "Available upon request",
        },
    },
    footer: Footer {
        rights: "© 2024 Ali Bahaa Alawsi. All rights reserved. | Cybersecurity Expert & Researcher",
    },
    toasts: Toasts {
        sent_title: "Message sent successfully!",
        sent_description: "We'll get back to you soon.",
        failed_title: "Error sending message",
        failed_description: "Please try again later or contact us directly.",
        invalid_title: "Please complete the form",
        invalid_description: "All fields are required and the email address must be valid.",
    },
    chrome: Chrome {
        switch_language: "العربية",
        theme_light: "Light",
        theme_dark: "Dark",
        menu_title: "Menu",
        audio_title: "Intro",
        hints_browse: "1-6 sections · g menu · l language · t theme · space play · m mute · +/- volume · i write message · q quit",
        hints_edit: "tab next field · shift+tab previous · enter send · esc stop editing",
    },
};
