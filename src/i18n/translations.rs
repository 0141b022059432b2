//! Static translation tables for the three supported locales.
//!
//! The key set is the struct itself, so "identical keys across all locales"
//! holds at compile time. Strings with `{placeholder}` tokens are expanded
//! with [`crate::i18n::fill`].

use super::Locale;

pub struct Translations {
    pub brand_name: &'static str,
    pub month_names: [&'static str; 12],
    pub nav: Nav,
    pub hero: Hero,
    pub stats: Stats,
    pub home_cta: HomeCta,
    pub about: About,
    pub projects: Projects,
    pub news: News,
    pub donate: Donate,
    pub community: Community,
    pub footer: Footer,
    pub assistant: Assistant,
    pub seo: Seo,
}

pub struct Nav {
    pub home: &'static str,
    pub projects: &'static str,
    pub about: &'static str,
    pub donate: &'static str,
    pub news: &'static str,
    pub community: &'static str,
    pub contact: &'static str,
    pub assistant: &'static str,
}

pub struct Hero {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cta_primary: &'static str,
    pub cta_secondary: &'static str,
    pub what_we_do_title: &'static str,
    pub what_we_do_list: &'static [&'static str],
}

pub struct Stats {
    pub label1: &'static str,
    pub label2: &'static str,
    pub label3: &'static str,
}

pub struct HomeCta {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub button_donate: &'static str,
    pub button_join: &'static str,
}

pub struct About {
    pub who_we_are_title: &'static str,
    pub who_we_are_text: &'static str,
    pub mission_title: &'static str,
    pub mission_text: &'static str,
    pub values_title: &'static str,
    pub values_list: &'static [&'static str],
    pub activities_title: &'static str,
    pub activities_list: &'static [&'static str],
}

pub struct Projects {
    pub title: &'static str,
    pub status_ongoing: &'static str,
    pub status_completed: &'static str,
    pub status_planned: &'static str,
}

pub struct News {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub search_placeholder: &'static str,
    pub read_more: &'static str,
    pub no_results: &'static str,
    pub showing_results: &'static str,
    pub for_query: &'static str,
    pub page_of: &'static str,
    pub previous: &'static str,
    pub next: &'static str,
    pub back_to_news: &'static str,
    pub post_not_found: &'static str,
    pub post_not_found_text: &'static str,
    pub older_post: &'static str,
    pub newer_post: &'static str,
    pub related_posts: &'static str,
}

pub struct Donate {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub ways_to_help: &'static [&'static str],
    pub bank_transfer: &'static str,
    pub crypto: &'static str,
    pub paypal: &'static str,
}

pub struct Community {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub error_text: &'static str,
    pub retry_button: &'static str,
    pub no_posts_text: &'static str,
    pub view_on_facebook: &'static str,
    pub posted_on: &'static str,
}

pub struct Footer {
    pub rights: &'static str,
    pub address: &'static str,
    pub contacts_title: &'static str,
}

pub struct Assistant {
    pub title: &'static str,
    pub greeting: &'static str,
    pub placeholder: &'static str,
    pub send: &'static str,
    pub demo_mode: &'static str,
    pub unavailable: &'static str,
}

pub struct Seo {
    pub home: PageMeta,
    pub projects: PageMeta,
    pub news: PageMeta,
    pub about: PageMeta,
    pub donate: PageMeta,
    pub community: PageMeta,
}

pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
}

pub fn table(locale: Locale) -> &'static Translations {
    match locale {
        Locale::Ua => &UA,
        Locale::En => &EN,
        Locale::De => &DE,
    }
}

static EN: Translations = Translations {
    brand_name: "Neusatz",
    month_names: [
        "January", "February", "March", "April", "May", "June", "July", "August", "September",
        "October", "November", "December",
    ],
    nav: Nav {
        home: "Home",
        projects: "Projects",
        about: "About Us",
        donate: "Get Involved",
        news: "News",
        community: "Community",
        contact: "Contact",
        assistant: "Ask AI",
    },
    hero: Hero {
        title: "Neusatz — a community where people create change",
        subtitle: "We empower the Berezanka community through innovation, education, economic development, memory of our roots, and strong local networks.",
        cta_primary: "Support Us",
        cta_secondary: "Our Projects",
        what_we_do_title: "We work to:",
        what_we_do_list: &[
            "Create opportunities for youth and families",
            "Launch modern industries and entrepreneurship",
            "Strengthen sports and culture in rural areas",
            "Introduce digital solutions for local governance",
            "Support veterans and vulnerable groups",
            "Preserve historical memory and local heritage",
            "Promote green energy and climate-resilient development",
        ],
    },
    stats: Stats {
        label1: "Villages Supported",
        label2: "Initiatives Launched",
        label3: "Community Partners",
    },
    home_cta: HomeCta {
        title: "Shape the Future Together",
        subtitle: "Your contribution helps us implement vital projects and support our community. Every donation and every volunteer hour counts.",
        button_donate: "Support Financially",
        button_join: "Become a Volunteer",
    },
    about: About {
        who_we_are_title: "Who We Are",
        who_we_are_text: "Neusatz is a modern, community-based NGO created to support the development of the Berezanka rural community. We work so that villages like Progresivka, Tashyne, Lyubylyne, Dmytrivka, Kobleve and others have the infrastructure, opportunities, and social capital they need to grow. Our role is to connect active residents, local authorities, businesses, and international partners around concrete projects that improve everyday life in the community.",
        mission_title: "Our Mission",
        mission_text: "To create an environment where communities grow through innovation, education, economic projects, respect for history, and mutual support.",
        values_title: "Our Values",
        values_list: &[
            "Responsibility",
            "Transparency",
            "Humanity",
            "Innovation",
            "Partnership",
        ],
        activities_title: "What We Do",
        activities_list: &[
            "Launch economic and industrial projects",
            "Develop aquaculture and modernize the fisheries sector",
            "Strengthen youth, sports, and cultural opportunities",
            "Implement digital solutions for local governance",
            "Support veterans and initiate social reintegration programs",
            "Preserve the historical memory of Neusatz / Progresivka and surrounding villages",
            "Support green energy, water management, and ecological projects",
        ],
    },
    projects: Projects {
        title: "Our Projects",
        status_ongoing: "Ongoing",
        status_completed: "Completed",
        status_planned: "Planned",
    },
    news: News {
        title: "News & Insights",
        subtitle: "Latest updates on our initiatives, community stories, and future plans.",
        search_placeholder: "Search articles...",
        read_more: "Read Article",
        no_results: "No news found matching your criteria.",
        showing_results: "Showing {count} of {total} results",
        for_query: "for \"{query}\"",
        page_of: "Page {current} of {total}",
        previous: "Previous",
        next: "Next",
        back_to_news: "Back to News",
        post_not_found: "Post Not Found",
        post_not_found_text: "The post you're looking for doesn't exist or has been removed.",
        older_post: "Older Post",
        newer_post: "Newer Post",
        related_posts: "Related Posts",
    },
    donate: Donate {
        title: "Get Involved",
        subtitle: "You can help develop the community by donating, volunteering, offering equipment or expertise, or partnering with us.",
        ways_to_help: &[
            "Donate funds",
            "Become a volunteer",
            "Offer equipment or expertise",
            "Propose a partnership",
            "Host a local event or fundraiser",
        ],
        bank_transfer: "Bank Transfer (IBAN)",
        crypto: "Crypto Donation",
        paypal: "PayPal",
    },
    community: Community {
        title: "Community Updates",
        subtitle: "Latest posts from our Facebook page. Stay connected with Neusatz!",
        error_text: "Unable to load posts. Please try again.",
        retry_button: "Retry",
        no_posts_text: "No posts available at the moment.",
        view_on_facebook: "View on Facebook",
        posted_on: "Posted on",
    },
    footer: Footer {
        rights: "Neusatz NGO. All rights reserved.",
        address: "Progresivka, Berezanka Community, Mykolaiv Region, Ukraine",
        contacts_title: "Contacts",
    },
    assistant: Assistant {
        title: "Neusatz AI Assistant",
        greeting: "Hello! I can tell you about Neusatz NGO. What would you like to know?",
        placeholder: "Ask a question...",
        send: "Send",
        demo_mode: "Demo Mode: the AI assistant is not configured on this server.",
        unavailable: "Sorry, our AI service is currently unavailable. Please try again later.",
    },
    seo: Seo {
        home: PageMeta {
            title: "Community Development NGO",
            description: "Neusatz is a community NGO developing the Berezanka community through innovation, education, economic projects and strong local networks.",
        },
        projects: PageMeta {
            title: "Our Projects",
            description: "Infrastructure, culture, ecology and civic-tech projects run by the Neusatz NGO in the Berezanka community.",
        },
        news: PageMeta {
            title: "News & Insights",
            description: "Latest updates on Neusatz initiatives, community stories, and future plans.",
        },
        about: PageMeta {
            title: "About Us",
            description: "Who we are, our mission and our values: the Neusatz community NGO.",
        },
        donate: PageMeta {
            title: "Get Involved",
            description: "Support the Berezanka community: donate, volunteer or partner with Neusatz.",
        },
        community: PageMeta {
            title: "Community Updates",
            description: "Latest posts from the Neusatz Facebook community page.",
        },
    },
};

static UA: Translations = Translations {
    brand_name: "ГО «Нейзац»",
    month_names: [
        "січня", "лютого", "березня", "квітня", "травня", "червня", "липня", "серпня",
        "вересня", "жовтня", "листопада", "грудня",
    ],
    nav: Nav {
        home: "Головна",
        projects: "Проєкти",
        about: "Про нас",
        donate: "Долучитися",
        news: "Новини",
        community: "Громада",
        contact: "Контакти",
        assistant: "AI Асистент",
    },
    hero: Hero {
        title: "ГО «Нейзац» — простір людей, які змінюють громаду",
        subtitle: "Ми розвиваємо Березанську громаду через інновації, освіту, економічні та соціальні проєкти, збереження історичної памʼяті та сильні спільноти.",
        cta_primary: "Підтримати",
        cta_secondary: "Наші проєкти",
        what_we_do_title: "Ми працюємо, щоб:",
        what_we_do_list: &[
            "створювати нові можливості для молоді та родин",
            "запускати сучасні індустрії та виробництва",
            "розвивати спорт і культуру в селах",
            "впроваджувати цифрові рішення для управління громадою",
            "підтримувати ветеранів та вразливі групи",
            "зберігати історію та культурну спадщину наших сіл",
            "просувати «зелену» енергетику та сталий розвиток",
        ],
    },
    stats: Stats {
        label1: "Охоплених сіл",
        label2: "Запущених ініціатив",
        label3: "Партнерів громади",
    },
    home_cta: HomeCta {
        title: "Творимо майбутнє разом",
        subtitle: "Ваш внесок допомагає нам реалізовувати важливі проєкти та підтримувати громаду. Кожна пожертва та кожна година волонтерства мають значення.",
        button_donate: "Підтримати фінансово",
        button_join: "Стати волонтером",
    },
    about: About {
        who_we_are_title: "Хто ми",
        who_we_are_text: "ГО «Нейзац» — це сучасна громадська організація, створена для розвитку Березанської громади. Ми працюємо над тим, щоб села Прогресівка, Ташине, Люблине, Дмитрівка, Коблеве та інші населені пункти мали інфраструктуру, можливості та соціальний капітал, необхідні для зростання. Наша мета — обʼєднувати активних мешканців, місцеву владу, бізнес та партнерів навколо конкретних справ: від спорту й культури до цифрових сервісів, економічних проєктів та збереження історичної памʼяті села Нейзац / Прогресівка.",
        mission_title: "Наша Місія",
        mission_text: "Створювати умови, у яких громади розвиваються через інновації, освіту, економічні та соціальні ініціативи, повагу до минулого й взаємну підтримку.",
        values_title: "Наші Цінності",
        values_list: &[
            "Відповідальність",
            "Прозорість",
            "Гуманізм",
            "Інновації",
            "Партнерство",
        ],
        activities_title: "Що ми робимо",
        activities_list: &[
            "запускаємо економічні та індустріальні проєкти",
            "розвиваємо аквакультуру та модернізуємо рибну галузь",
            "покращуємо молодіжні, спортивні та культурні можливості",
            "впроваджуємо цифрові технології в роботу громади",
            "підтримуємо ветеранів та організовуємо соціальні програми",
            "працюємо над створенням меморіалу та збереженням історії Нойзатц / Прогресівки",
            "просуваємо «зелену» енергетику, водні та екологічні проєкти",
        ],
    },
    projects: Projects {
        title: "Наші Проєкти",
        status_ongoing: "В процесі",
        status_completed: "Завершено",
        status_planned: "Заплановано",
    },
    news: News {
        title: "Новини та Статті",
        subtitle: "Останні оновлення наших ініціатив, історії громади та плани на майбутнє.",
        search_placeholder: "Пошук новин...",
        read_more: "Читати статтю",
        no_results: "Новин за вашим запитом не знайдено.",
        showing_results: "Показано {count} з {total} результатів",
        for_query: "за запитом \"{query}\"",
        page_of: "Сторінка {current} з {total}",
        previous: "Назад",
        next: "Вперед",
        back_to_news: "Назад до новин",
        post_not_found: "Публікацію не знайдено",
        post_not_found_text: "Публікація, яку ви шукаєте, не існує або була видалена.",
        older_post: "Старіша публікація",
        newer_post: "Новіша публікація",
        related_posts: "Схожі публікації",
    },
    donate: Donate {
        title: "Долучитися",
        subtitle: "Ви можете підтримати розвиток громади: зробити пожертву, стати волонтером, допомогти з обладнанням чи експертизою, організувати подію або запропонувати партнерство.",
        ways_to_help: &[
            "Зробити пожертву",
            "Стати волонтером",
            "Допомогти з обладнанням чи експертизою",
            "Запропонувати партнерство",
            "Організувати локальну благодійну подію",
        ],
        bank_transfer: "Банківський переказ",
        crypto: "Криптовалюта",
        paypal: "PayPal",
    },
    community: Community {
        title: "Новини громади",
        subtitle: "Останні публікації з нашої сторінки Facebook. Залишайтесь на зв'язку з ГО «Нейзац»!",
        error_text: "Не вдалося завантажити публікації. Будь ласка, спробуйте ще раз.",
        retry_button: "Повторити",
        no_posts_text: "Наразі публікацій немає.",
        view_on_facebook: "Переглянути на Facebook",
        posted_on: "Опубліковано",
    },
    footer: Footer {
        rights: "ГО «Нейзац». Всі права захищено.",
        address: "с. Прогресівка, Березанська громада, Миколаївська обл., Україна",
        contacts_title: "Контакти",
    },
    assistant: Assistant {
        title: "AI Асистент «Нейзац»",
        greeting: "Вітаю! Я можу розповісти про ГО «Нейзац». Що вас цікавить?",
        placeholder: "Поставте запитання...",
        send: "Надіслати",
        demo_mode: "Демо-режим: AI асистент не налаштований на цьому сервері.",
        unavailable: "Вибачте, наш AI сервіс тимчасово недоступний. Будь ласка, спробуйте пізніше.",
    },
    seo: Seo {
        home: PageMeta {
            title: "Громадська організація розвитку громади",
            description: "ГО «Нейзац» — громадська організація, що розвиває Березанську громаду через інновації, освіту, економічні проєкти та сильні спільноти.",
        },
        projects: PageMeta {
            title: "Наші Проєкти",
            description: "Інфраструктурні, культурні, екологічні та civic-tech проєкти ГО «Нейзац» у Березанській громаді.",
        },
        news: PageMeta {
            title: "Новини та Статті",
            description: "Останні оновлення ініціатив ГО «Нейзац», історії громади та плани на майбутнє.",
        },
        about: PageMeta {
            title: "Про нас",
            description: "Хто ми, наша місія та цінності: громадська організація «Нейзац».",
        },
        donate: PageMeta {
            title: "Долучитися",
            description: "Підтримайте Березанську громаду: пожертва, волонтерство чи партнерство з ГО «Нейзац».",
        },
        community: PageMeta {
            title: "Новини громади",
            description: "Останні публікації зі сторінки громади «Нейзац» у Facebook.",
        },
    },
};

static DE: Translations = Translations {
    brand_name: "Neusatz",
    month_names: [
        "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September",
        "Oktober", "November", "Dezember",
    ],
    nav: Nav {
        home: "Startseite",
        projects: "Projekte",
        about: "Über Uns",
        donate: "Mitmachen",
        news: "Aktuelles",
        community: "Gemeinschaft",
        contact: "Kontakt",
        assistant: "KI-Assistent",
    },
    hero: Hero {
        title: "Neusatz — eine Gemeinschaft, die Veränderung schafft",
        subtitle: "Wir stärken die Gemeinde Berezanka durch Innovation, Bildung, wirtschaftliche Entwicklung, Erinnerungskultur und ein starkes lokales Netzwerk.",
        cta_primary: "Unterstützen",
        cta_secondary: "Unsere Projekte",
        what_we_do_title: "Wir arbeiten daran:",
        what_we_do_list: &[
            "neue Möglichkeiten für Kinder, Jugendliche und Familien zu schaffen",
            "moderne Industrien und lokale Unternehmen aufzubauen",
            "Sport und Kultur in den Dörfern zu fördern",
            "digitale Lösungen für die Gemeindeverwaltung einzuführen",
            "Veteranen und schutzbedürftige Gruppen zu unterstützen",
            "historisches Erbe und lokale Identität zu bewahren",
            "grüne Energie und nachhaltige Entwicklung zu fördern",
        ],
    },
    stats: Stats {
        label1: "Unterstützte Dörfer",
        label2: "Gestartete Initiativen",
        label3: "Gemeindepartner",
    },
    home_cta: HomeCta {
        title: "Gemeinsam die Zukunft gestalten",
        subtitle: "Ihr Beitrag hilft uns, wichtige Projekte umzusetzen und unsere Gemeinschaft zu stärken. Jede Spende und jede Stunde ehrenamtlicher Arbeit zählt.",
        button_donate: "Finanziell unterstützen",
        button_join: "Freiwilliger werden",
    },
    about: About {
        who_we_are_title: "Wer wir sind",
        who_we_are_text: "Neusatz ist eine moderne, gemeinwohlorientierte Organisation, die sich der Entwicklung der Gemeinde Berezanka widmet. Wir arbeiten daran, dass Dörfer wie Progresivka, Tashyne, Lyubylyne, Dmytrivka, Kobleve und andere über die Infrastruktur, Chancen und den sozialen Zusammenhalt verfügen, den sie für nachhaltiges Wachstum brauchen. Unsere Aufgabe ist es, engagierte Bürgerinnen und Bürger, die lokale Verwaltung, Unternehmen und internationale Partner rund um konkrete Projekte zusammenzubringen.",
        mission_title: "Unsere Mission",
        mission_text: "Ein Umfeld zu schaffen, in dem Gemeinden durch Innovation, Bildung, wirtschaftliche Projekte, Erinnerungskultur und gegenseitige Unterstützung wachsen.",
        values_title: "Unsere Werte",
        values_list: &[
            "Verantwortung",
            "Transparenz",
            "Menschlichkeit",
            "Innovation",
            "Partnerschaft",
        ],
        activities_title: "Was wir tun",
        activities_list: &[
            "wirtschaftliche und industrielle Projekte starten",
            "Aquakultur fördern und den Fischereisektor modernisieren",
            "Jugend, Sport und Kultur stärken",
            "digitale Lösungen für die lokale Verwaltung einführen",
            "Veteranen unterstützen und soziale Programme aufbauen",
            "die Geschichte von Neusatz / Progresivka und der Region bewahren",
            "grüne Energie-, Wasser- und Umweltprojekte entwickeln",
        ],
    },
    projects: Projects {
        title: "Unsere Projekte",
        status_ongoing: "Laufend",
        status_completed: "Abgeschlossen",
        status_planned: "Geplant",
    },
    news: News {
        title: "Aktuelles & Einblicke",
        subtitle: "Neueste Updates zu unseren Initiativen, Geschichten aus der Gemeinde und Zukunftspläne.",
        search_placeholder: "Artikel suchen...",
        read_more: "Artikel lesen",
        no_results: "Keine Nachrichten gefunden.",
        showing_results: "{count} von {total} Ergebnissen",
        for_query: "für \"{query}\"",
        page_of: "Seite {current} von {total}",
        previous: "Zurück",
        next: "Weiter",
        back_to_news: "Zurück zu Aktuelles",
        post_not_found: "Beitrag nicht gefunden",
        post_not_found_text: "Der gesuchte Beitrag existiert nicht oder wurde entfernt.",
        older_post: "Älterer Beitrag",
        newer_post: "Neuerer Beitrag",
        related_posts: "Ähnliche Beiträge",
    },
    donate: Donate {
        title: "Mitmachen",
        subtitle: "Sie können unsere Arbeit unterstützen – durch Spenden, ehrenamtliches Engagement, fachliche Hilfe oder Ausrüstung sowie durch Partnerschaften.",
        ways_to_help: &[
            "Spenden",
            "Freiwilligenarbeit",
            "Ausrüstung oder Fachwissen anbieten",
            "Partnerschaft vorschlagen",
            "Lokale Benefizveranstaltung organisieren",
        ],
        bank_transfer: "Banküberweisung",
        crypto: "Kryptowährung",
        paypal: "PayPal",
    },
    community: Community {
        title: "Community-Updates",
        subtitle: "Neueste Beiträge von unserer Facebook-Seite. Bleiben Sie mit Neusatz verbunden!",
        error_text: "Beiträge konnten nicht geladen werden. Bitte versuchen Sie es erneut.",
        retry_button: "Wiederholen",
        no_posts_text: "Derzeit sind keine Beiträge verfügbar.",
        view_on_facebook: "Auf Facebook ansehen",
        posted_on: "Veröffentlicht am",
    },
    footer: Footer {
        rights: "Neusatz NGO. Alle Rechte vorbehalten.",
        address: "Progresivka, Gemeinde Berezanka, Region Mykolajiw, Ukraine",
        contacts_title: "Kontakt",
    },
    assistant: Assistant {
        title: "Neusatz KI-Assistent",
        greeting: "Hallo! Ich kann Ihnen von der NGO Neusatz erzählen. Was möchten Sie wissen?",
        placeholder: "Stellen Sie eine Frage...",
        send: "Senden",
        demo_mode: "Demo-Modus: Der KI-Assistent ist auf diesem Server nicht konfiguriert.",
        unavailable: "Entschuldigung, unser KI-Dienst ist derzeit nicht verfügbar. Bitte versuchen Sie es später erneut.",
    },
    seo: Seo {
        home: PageMeta {
            title: "NGO für Gemeindeentwicklung",
            description: "Neusatz ist eine NGO, die die Gemeinde Berezanka durch Innovation, Bildung, wirtschaftliche Projekte und starke Netzwerke entwickelt.",
        },
        projects: PageMeta {
            title: "Unsere Projekte",
            description: "Infrastruktur-, Kultur-, Umwelt- und Civic-Tech-Projekte der NGO Neusatz in der Gemeinde Berezanka.",
        },
        news: PageMeta {
            title: "Aktuelles & Einblicke",
            description: "Neueste Updates zu Neusatz-Initiativen, Geschichten aus der Gemeinde und Zukunftspläne.",
        },
        about: PageMeta {
            title: "Über Uns",
            description: "Wer wir sind, unsere Mission und unsere Werte: die NGO Neusatz.",
        },
        donate: PageMeta {
            title: "Mitmachen",
            description: "Unterstützen Sie die Gemeinde Berezanka: spenden, engagieren oder mit Neusatz kooperieren.",
        },
        community: PageMeta {
            title: "Community-Updates",
            description: "Neueste Beiträge von der Facebook-Seite der Neusatz-Gemeinschaft.",
        },
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_locale_resolves_to_a_table() {
        for locale in Locale::ALL {
            let t = table(locale);
            assert!(!t.brand_name.is_empty());
            assert!(!t.news.title.is_empty());
        }
    }

    #[test]
    fn placeholder_templates_carry_expected_tokens() {
        for locale in Locale::ALL {
            let t = table(locale);
            assert!(t.news.showing_results.contains("{count}"));
            assert!(t.news.showing_results.contains("{total}"));
            assert!(t.news.for_query.contains("{query}"));
            assert!(t.news.page_of.contains("{current}"));
            assert!(t.news.page_of.contains("{total}"));
        }
    }

    #[test]
    fn list_lengths_match_across_locales() {
        let (en, ua, de) = (table(Locale::En), table(Locale::Ua), table(Locale::De));
        assert_eq!(en.hero.what_we_do_list.len(), ua.hero.what_we_do_list.len());
        assert_eq!(en.hero.what_we_do_list.len(), de.hero.what_we_do_list.len());
        assert_eq!(en.about.values_list.len(), ua.about.values_list.len());
        assert_eq!(en.about.values_list.len(), de.about.values_list.len());
        assert_eq!(en.donate.ways_to_help.len(), de.donate.ways_to_help.len());
    }
}
