//! Static localized project catalog, used by the projects page and the
//! assistant system prompt.

use crate::i18n::{Locale, Translations};

/// A string carried in all three locales.
#[derive(Debug, Clone, Copy)]
pub struct LocalizedText {
    pub ua: &'static str,
    pub en: &'static str,
    pub de: &'static str,
}

impl LocalizedText {
    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Ua => self.ua,
            Locale::En => self.en,
            Locale::De => self.de,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Ongoing,
    Completed,
    Planned,
}

impl ProjectStatus {
    pub fn label(&self, t: &Translations) -> &'static str {
        match self {
            ProjectStatus::Ongoing => t.projects.status_ongoing,
            ProjectStatus::Completed => t.projects.status_completed,
            ProjectStatus::Planned => t.projects.status_planned,
        }
    }
}

pub struct Project {
    pub id: &'static str,
    pub category: &'static str,
    pub status: ProjectStatus,
    pub image: &'static str,
    pub title: LocalizedText,
    pub description: LocalizedText,
    pub impact: LocalizedText,
}

pub static PROJECTS: &[Project] = &[
    Project {
        id: "1",
        category: "Culture",
        status: ProjectStatus::Ongoing,
        image: "https://images.unsplash.com/photo-1511632765486-a01980e01a18?auto=format&fit=crop&w=800&q=80",
        title: LocalizedText {
            en: "\u{201c}United Team\u{201d} Initiative",
            ua: "Ініціатива «ЄДИНА КОМАНДА»",
            de: "Initiative „EIN TEAM“",
        },
        description: LocalizedText {
            en: "A community cohesion program including \u{201c}My Family Story\u{201d} video competition, school engagement, and intergenerational cultural projects across Berezanka community.",
            ua: "Програма згуртування громади, що включає конкурс відеоінтервʼю «Історія моєї родини», залучення шкіл та міжпоколінні культурні ініціативи в Березанській громаді.",
            de: "Ein Programm zur Stärkung des sozialen Zusammenhalts, einschließlich des Videowettbewerbs „Geschichte meiner Familie“, der Schulen und mehrere Generationen einbindet.",
        },
        impact: LocalizedText {
            en: "500+ participants engaged",
            ua: "Залучено 500+ учасників",
            de: "500+ Teilnehmer engagiert",
        },
    },
    Project {
        id: "2",
        category: "Infrastructure",
        status: ProjectStatus::Planned,
        image: "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?auto=format&fit=crop&w=800&q=80",
        title: LocalizedText {
            en: "Progresivka Industrial Park",
            ua: "Індустріальний парк «Прогресівка»",
            de: "Industriepark Progresivka",
        },
        description: LocalizedText {
            en: "A development zone for new industries, data centers, logistics and renewable energy infrastructure in the south of Mykolaiv region.",
            ua: "Майданчик для розвитку нових виробництв, дата-центрів, логістики та обʼєктів відновлюваної енергетики на півдні Миколаївщини.",
            de: "Ein Standort für neue Industrien, Rechenzentren, Logistik und Projekte im Bereich erneuerbare Energien im Süden der Region Mykolajiw.",
        },
        impact: LocalizedText {
            en: "Creating 200+ local jobs",
            ua: "Створення 200+ робочих місць",
            de: "Schaffung von 200+ Arbeitsplätzen",
        },
    },
    Project {
        id: "3",
        category: "Ecology",
        status: ProjectStatus::Ongoing,
        image: "https://images.unsplash.com/photo-1500375592092-40eb2168fd21?auto=format&fit=crop&w=800&q=80",
        title: LocalizedText {
            en: "EcoSmart Water Reservoirs",
            ua: "EcoSmart Water Reservoirs",
            de: "EcoSmart Water Reservoirs",
        },
        description: LocalizedText {
            en: "An innovative reservoir model supporting clean energy, aquaculture, biodiversity and ecological stability in rural communities.",
            ua: "Інноваційна система водних резервуарів для «зеленої» енергетики, аквакультури, біорізноманіття та екологічної стабільності в сільських громадах.",
            de: "Ein innovatives Reservoirsystem für erneuerbare Energie, Aquakultur, Biodiversität und ökologische Stabilität in ländlichen Gemeinden.",
        },
        impact: LocalizedText {
            en: "Sustainable water management",
            ua: "Стале управління водними ресурсами",
            de: "Nachhaltiges Wassermanagement",
        },
    },
    Project {
        id: "4",
        category: "Civic-Tech",
        status: ProjectStatus::Planned,
        image: "https://images.unsplash.com/photo-1544197150-b99a580bb7a8?auto=format&fit=crop&w=800&q=80",
        title: LocalizedText {
            en: "Progresivka Data Center",
            ua: "Дата-центр у Прогресівці",
            de: "Rechenzentrum Progresivka",
        },
        description: LocalizedText {
            en: "A rural AI and cloud infrastructure project creating high-tech jobs, supporting research, and generating income for the community.",
            ua: "Проєкт створення AI-та хмарної інфраструктури в селі, що забезпечує високотехнологічні робочі місця, підтримує дослідження та приносить громаді нові доходи.",
            de: "Ein Projekt zum Aufbau von KI- und Cloud-Infrastruktur im ländlichen Raum, das High-Tech-Arbeitsplätze schafft und zusätzliche Einnahmen für die Gemeinde generiert.",
        },
        impact: LocalizedText {
            en: "High-tech in the village",
            ua: "High-tech у селі",
            de: "High-Tech im ländlichen Raum",
        },
    },
    Project {
        id: "5",
        category: "Civic-Tech",
        status: ProjectStatus::Ongoing,
        image: "https://images.unsplash.com/photo-1519389950473-47ba0277781c?auto=format&fit=crop&w=800&q=80",
        title: LocalizedText {
            en: "Fisheries Sector Reform",
            ua: "Реформа рибної галузі",
            de: "Reform des Fischereisektors",
        },
        description: LocalizedText {
            en: "Policy analysis, public campaigns, official letters, and reform proposals for a transparent and sustainable fisheries and aquaculture sector in Ukraine.",
            ua: "Аналітика, публічні кампанії, офіційні звернення та розробка реформаторських пропозицій для прозорої та сталої рибної галузі й аквакультури в Україні.",
            de: "Analysen, Öffentlichkeitsarbeit, offizielle Schreiben und Reformvorschläge für einen transparenten und nachhaltigen Fischerei- und Aquakultursektor in der Ukraine.",
        },
        impact: LocalizedText {
            en: "Transparent regulations",
            ua: "Прозорі правила",
            de: "Transparente Vorschriften",
        },
    },
    Project {
        id: "6",
        category: "Sports",
        status: ProjectStatus::Completed,
        image: "https://images.unsplash.com/photo-1571019614242-c5c5dee9f50b?auto=format&fit=crop&w=800&q=80",
        title: LocalizedText {
            en: "Sports Hub",
            ua: "Спортивний хаб",
            de: "Sport-Hub",
        },
        description: LocalizedText {
            en: "A modern sports club system with youth and adult sections, renovated facilities and regular tournaments in the Berezanka community.",
            ua: "Сучасна клубна система спорту з секціями для дітей та дорослих, оновленою інфраструктурою та регулярними турнірами в Березанській громаді.",
            de: "Ein modernes Vereinssystem mit Sportangeboten für Jugendliche und Erwachsene, erneuerter Infrastruktur und regelmäßigen Turnieren in der Gemeinde Berezanka.",
        },
        impact: LocalizedText {
            en: "Healthy youth",
            ua: "Здорова молодь",
            de: "Gesunde Jugend",
        },
    },
    Project {
        id: "7",
        category: "Culture",
        status: ProjectStatus::Planned,
        image: "https://images.unsplash.com/photo-1549897164-5a3d8a4b10c5?auto=format&fit=crop&w=800&q=80",
        title: LocalizedText {
            en: "Neusatz Memorial & Heritage Park",
            ua: "Меморіал та парк спадщини «Нейзац»",
            de: "Neusatz-Gedenk- und Erinnerungspark",
        },
        description: LocalizedText {
            en: "A memorial and public space in Progresivka dedicated to the history of Neusatz, local families and those who lost their lives defending Ukraine.",
            ua: "Меморіал та громадський простір у Прогресівці, присвячений історії Нойзатц / Нейзац, місцевим родинам та всім, хто віддав життя за Україну.",
            de: "Ein Gedenk- und Begegnungsort in Progresivka, der der Geschichte von Neusatz, den lokalen Familien und allen gewidmet ist, die ihr Leben für die Ukraine gegeben haben.",
        },
        impact: LocalizedText {
            en: "Preserved memory and stronger identity",
            ua: "Збережена памʼять та посилена відчутність спільної ідентичності",
            de: "Bewahrte Erinnerung und gestärkte lokale Identität",
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_ids_are_unique() {
        let mut ids: Vec<&str> = PROJECTS.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn localized_text_selects_by_locale() {
        let project = &PROJECTS[1];
        assert_eq!(project.title.get(Locale::En), "Progresivka Industrial Park");
        assert_eq!(
            project.title.get(Locale::Ua),
            "Індустріальний парк «Прогресівка»"
        );
        assert_eq!(project.title.get(Locale::De), "Industriepark Progresivka");
    }

    #[test]
    fn status_labels_come_from_the_active_table() {
        let t = Locale::De.translations();
        assert_eq!(ProjectStatus::Completed.label(t), "Abgeschlossen");
    }
}
