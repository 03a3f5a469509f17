use super::{
    About, Achievement, Achievements, Chrome, Contact, ContactInfo, Content, Footer, FormLabels,
    Hero, NavLabels, Project, Projects, Service, Services, Toasts,
};

pub(super) static AR: Content = Content {
    nav: NavLabels {
        home: "الرئيسية",
        about: "نبذة عني",
        services: "الخدمات",
        achievements: "الإنجازات",
        projects: "المشاريع",
        contact: "التواصل",
    },
    hero: Hero {
        title: "علي بهاء الأوسي",
        subtitle: "خبير الأمن السيبراني وباحث الثغرات",
        description: "متخصص في اختبار الاختراق وتقييم الثغرات الأمنية والاستشارات الأمنية. معترف به من قبل كبرى شركات التكنولوجيا لاكتشاف العيوب الأمنية الحرجة.",
        cta: "طلب تقييم أمني",
        cta_secondary: "عرض الأعمال",
    },
    about: About {
        title: "نبذة عني",
        description: "محترف أمن سيبراني مختص في أبحاث الثغرات والقرصنة الأخلاقية.",
        biography: "باحث أمني عراقي لديه شغف لاكتشاف الثغرات وتعزيز الأمان الرقمي. مُدرج في برنامج WhiteHat الخاص بشركة Meta ومُعترف به من قبل Pinterest لاكتشاف عيوب أمنية حرجة. ملتزم بجعل العالم الرقمي أكثر أماناً من خلال القرصنة الأخلاقية والكشف المسؤول.",
        skills: "الخبرات الأساسية",
        download_cv: "تحميل السيرة الذاتية",
        view_profile: "عرض الملف الشخصي",
    },
    services: Services {
        title: "الخدمات الأمنية",
        subtitle: "حلول أمن سيبراني احترافية مصممة لتلبية احتياجاتك",
        items: [
            Service {
                title: "اختبار الاختراق",
                description: "تقييمات أمنية شاملة لتحديد الثغرات قبل أن يكتشفها المهاجمون.",
                features: [
                    "اختبار تطبيقات الويب",
                    "تقييم أمان الشبكات",
                    "اختبارات الهندسة الاجتماعية",
                    "تقارير مفصلة",
                ],
            },
            Service {
                title: "تقييم الثغرات",
                description: "تقييم منهجي لنقاط الضعف الأمنية في البنية التحتية الرقمية.",
                features: [
                    "المسح الآلي",
                    "التحقق اليدوي",
                    "ترتيب المخاطر حسب الأولوية",
                    "إرشادات المعالجة",
                ],
            },
            Service {
                title: "الاستشارات الأمنية",
                description: "إرشادات خبراء حول استراتيجية الأمان والامتثال وأفضل الممارسات.",
                features: [
                    "مراجعة هندسة الأمان",
                    "تقييم الامتثال",
                    "التدريب والتوعية",
                    "تخطيط الاستجابة للحوادث",
                ],
            },
        ],
    },
    achievements: Achievements {
        title: "التقدير والإنجازات",
        subtitle: "معترف به من قبل شركات التكنولوجيا الرائدة للأبحاث الأمنية",
        items: [
            Achievement {
                platform: "ميتا (فيسبوك)",
                description: "مُدرج في برنامج WhiteHat الخاص بشركة Meta لاكتشاف ثغرات حرجة",
                year: "2023",
            },
            Achievement {
                platform: "بينتيريست",
                description: "مُميز لتحديد والكشف المسؤول عن العيوب الأمنية",
                year: "2023",
            },
            Achievement {
                platform: "برامج مكافآت الأخطاء",
                description: "مشارك نشط في برامج مكافآت الأخطاء المختلفة مع اكتشافات ناجحة",
                year: "مستمر",
            },
        ],
    },
    projects: Projects {
        title: "الأدوات والمشاريع",
        subtitle: "أدوات أمنية ومشاريع بحثية تم تطويرها",
        items: [
            Project {
                name: "بوت المسح الأمني",
                description: "بوت آلي لمسح الثغرات عبر تيليجرام",
                tech: &["Python", "Telegram API", "أدوات أمنية"],
                link: "https://t.me/awsi_bot",
            },
            Project {
                name: "أدوات أمان الويب",
                description: "مجموعة من أدوات اختبار الأمان المخصصة",
                tech: &["Python", "JavaScript", "Bash"],
                link: "https://github.com/awsi",
            },
            Project {
                name: "تقارير البحث",
                description: "أبحاث أمنية منشورة وتقارير الثغرات",
                tech: &["البحث الأمني", "التوثيق"],
                link: "#",
            },
        ],
    },
    contact: Contact {
        title: "تواصل معي",
        subtitle: "مستعد لتأمين أصولك الرقمية؟ دعنا نناقش احتياجاتك الأمنية.",
        form: FormLabels {
            name: "الاسم الكامل",
            email: "عنوان البريد الإلكتروني",
            subject: "الموضوع",
            message: "الرسالة",
            send: "إرسال الرسالة",
            sending: "جارٍ الإرسال...",
        },
        info: ContactInfo {
            email: "البريد الإلكتروني للتواصل",
            location: "بغداد، العراق",
            phone: "متاح عند الطلب",
        },
    },
    footer: Footer {
        rights: "© 2024 علي بهاء الأوسي. جميع الحقوق محفوظة. | خبير وباحث في الأمن السيبراني",
    },
    toasts: Toasts {
        sent_title: "تم إرسال الرسالة بنجاح!",
        sent_description: "سنتواصل معك قريباً.",
        failed_title: "خطأ في إرسال الرسالة",
        failed_description: "يرجى المحاولة لاحقاً أو التواصل معنا مباشرة.",
        invalid_title: "يرجى إكمال النموذج",
        invalid_description: "جميع الحقول مطلوبة ويجب أن يكون البريد الإلكتروني صالحاً.",
    },
    chrome: Chrome {
        switch_language: "English",
        theme_light: "فاتح",
        theme_dark: "داكن",
        menu_title: "القائمة",
        audio_title: "مقدمة",
        hints_browse: "1-6 الأقسام · g القائمة · l اللغة · t المظهر · space تشغيل · m كتم · +/- الصوت · i كتابة رسالة · q خروج",
        hints_edit: "tab الحقل التالي · shift+tab السابق · enter إرسال · esc إنهاء التحرير",
    },
};
