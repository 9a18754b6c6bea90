use crate::types::taxonomy::Cluster;

pub trait Classifier {
    /// Total and deterministic: every phrase maps to exactly one cluster.
    fn classify(&self, phrase: &str) -> Cluster;
}

/// Fallback when no trigger matches.
pub const DEFAULT_CLUSTER: Cluster = Cluster::Functional;

/// Trigger vocabulary per cluster, evaluated top to bottom.
/// Triggers are lowercase and matched as substrings of the lowercased phrase.
pub const CLUSTER_TRIGGERS: &[(Cluster, &[&str])] = &[
    (
        Cluster::Technology,
        &[
            "речевая аналитика",
            "speech analytics",
            "ai",
            "искусственный интеллект",
            "машинное обучение",
            "нейросети",
            "транскрибация",
            "распознавание речи",
        ],
    ),
    (
        Cluster::Industry,
        &[
            "колл-центр",
            "call center",
            "контакт-центр",
            "телефония",
            "клиентский сервис",
            "продажи по телефону",
        ],
    ),
    (
        Cluster::Functional,
        &[
            "контроль качества",
            "мониторинг звонков",
            "анализ разговоров",
            "оценка звонков",
            "скрипты продаж",
            "обучение менеджеров",
        ],
    ),
    (
        Cluster::Problem,
        &[
            "низкая конверсия",
            "мусорные лиды",
            "пропущенные звонки",
            "текучка менеджеров",
            "падение продаж",
        ],
    ),
    (
        Cluster::Integration,
        &["битрикс24", "amocrm", "crm", "интеграция", "api", "webhook"],
    ),
    (
        Cluster::Pricing,
        &["цена", "стоимость", "тариф", "расчет", "бюджет", "roi"],
    ),
    (
        Cluster::Analytics,
        &["аналитика", "отчеты", "статистика", "метрики", "kpi", "дашборд"],
    ),
    (
        Cluster::Training,
        &["обучение", "тренинг", "курсы", "семинар", "вебинар", "консультация"],
    ),
];

/// First-match classifier over an ordered trigger table.
pub struct TriggerClassifier {
    table: &'static [(Cluster, &'static [&'static str])],
    fallback: Cluster,
}

impl Default for TriggerClassifier {
    fn default() -> Self {
        Self::new(CLUSTER_TRIGGERS, DEFAULT_CLUSTER)
    }
}

impl TriggerClassifier {
    pub fn new(table: &'static [(Cluster, &'static [&'static str])], fallback: Cluster) -> Self {
        Self { table, fallback }
    }

    /// The first trigger that fires for `phrase`, if any.
    pub fn matching_trigger(&self, phrase: &str) -> Option<(Cluster, &'static str)> {
        let lowered = phrase.to_lowercase();
        self.table.iter().find_map(|(cluster, triggers)| {
            triggers
                .iter()
                .find(|t| lowered.contains(*t))
                .map(|t| (*cluster, *t))
        })
    }
}

impl Classifier for TriggerClassifier {
    fn classify(&self, phrase: &str) -> Cluster {
        self.matching_trigger(phrase)
            .map(|(cluster, _)| cluster)
            .unwrap_or(self.fallback)
    }
}
