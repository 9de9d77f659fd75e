//! UI translations
//!
//! Built-in Russian and English tables merged with string overrides from the
//! site config. Lookups walk an explicit chain: requested locale, then the
//! default locale, then the key itself, so a label is never blank.

use std::collections::BTreeMap;

use creatorhub_domain::Locale;
use tracing::debug;

const MONTHS_RU: [&str; 12] = [
    "Январь", "Февраль", "Март", "Апрель", "Май", "Июнь", "Июль", "Август", "Сентябрь", "Октябрь",
    "Ноябрь", "Декабрь",
];
const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];
const WEEKDAYS_RU: [&str; 7] = ["Пн", "Вт", "Ср", "Чт", "Пт", "Сб", "Вс"];
const WEEKDAYS_EN: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

const BUILTIN_EN: &[(&str, &str)] = &[
    ("recentVideosTitle", "Recent Videos"),
    ("themeLight", "Light Theme"),
    ("themeDark", "Dark Theme"),
    ("watchOnTwitch", "Watch on Twitch"),
    ("totalFollowers", "Total Followers: "),
    ("minecraftTitle", "My Minecraft Skin"),
    ("downloadSkin", "Download Skin"),
    ("loading", "Loading..."),
    ("supportButton", "Support Me"),
    ("devPageTitle", "Developer Info"),
    ("devLastUpdatedLabel", "Last Data Update:"),
    ("devDataJsonContentLabel", "data.json Content:"),
    ("devDebugInfoContentLabel", "API Debug Info:"),
    ("backToMainText", "Back to Main Site"),
    ("youtubeChannelLabel", "YouTube Channel"),
    ("telegramChannelLabel", "Telegram Channel"),
    ("instagramProfileLabel", "Instagram Profile"),
    ("xTwitterProfileLabel", "X (Twitter) Profile"),
    ("twitchChannelLabel", "Twitch Channel"),
    ("tiktokProfileLabel", "TikTok Profile"),
    ("vkGroupLabel", "VK (Group)"),
    ("vkPersonalPageLabel", "VK (Personal)"),
    ("myPortfolioLabel", "My Portfolio"),
    ("homeMyLinks", "My links"),
    ("homeSubscribeYoutube", "Subscribe on YouTube"),
    ("homeSupport", "Support"),
    ("homeTimeline", "Timeline"),
    ("homeExpand", "Expand"),
    ("homeCollapse", "Collapse"),
    ("liveEmptyTitle", "No stream right now"),
    ("liveEmptySub", "Streams are usually on Fridays, 17:00–19:00 MSK."),
    ("twitchAlsoLive", "Stream is also live on Twitch!"),
    ("legendYoutube", "YouTube"),
    ("legendTwitch", "Twitch"),
    ("legendBoth", "Both"),
    ("legendPlanned", "Planned"),
    ("legendMissed", "Struck-out — there was no stream"),
    ("calendarPrev", "Previous month"),
    ("calendarNext", "Next month"),
    ("liveStreamTitle", "Live stream"),
    ("notAvailable", "N/A"),
];

const BUILTIN_RU: &[(&str, &str)] = &[
    ("recentVideosTitle", "Последние видео"),
    ("themeLight", "Светлая тема"),
    ("themeDark", "Темная тема"),
    ("watchOnTwitch", "Смотреть на Twitch"),
    ("totalFollowers", "Всего подписчиков: "),
    ("minecraftTitle", "Мой скин Minecraft"),
    ("downloadSkin", "Скачать скин"),
    ("loading", "Загрузка..."),
    ("supportButton", "Поддержать меня"),
    ("devPageTitle", "Информация для разработчиков"),
    ("devLastUpdatedLabel", "Последнее обновление данных:"),
    ("devDataJsonContentLabel", "Содержимое data.json:"),
    ("devDebugInfoContentLabel", "Отладочная информация API:"),
    ("backToMainText", "Назад к сайту"),
    ("youtubeChannelLabel", "YouTube Канал"),
    ("telegramChannelLabel", "Telegram Канал"),
    ("instagramProfileLabel", "Instagram Профиль"),
    ("xTwitterProfileLabel", "X (Twitter) Профиль"),
    ("twitchChannelLabel", "Twitch Канал"),
    ("tiktokProfileLabel", "TikTok Профиль"),
    ("vkGroupLabel", "ВКонтакте (Группа)"),
    ("vkPersonalPageLabel", "ВКонтакте (Личная)"),
    ("myPortfolioLabel", "Мое Портфолио"),
    ("homeMyLinks", "Мои ссылки"),
    ("homeSubscribeYoutube", "Подписаться на YouTube"),
    ("homeSupport", "Поддержать"),
    ("homeTimeline", "Хронология"),
    ("homeExpand", "Развернуть"),
    ("homeCollapse", "Свернуть"),
    ("liveEmptyTitle", "Сейчас стрима нет"),
    ("liveEmptySub", "Обычно стримы по пятницам, 17:00–19:00 МСК."),
    ("twitchAlsoLive", "Стрим также идёт на Twitch!"),
    ("legendYoutube", "YouTube"),
    ("legendTwitch", "Twitch"),
    ("legendBoth", "Оба"),
    ("legendPlanned", "Потенциальный"),
    ("legendMissed", "Зачёркнутые — стрима не было"),
    ("calendarPrev", "Предыдущий месяц"),
    ("calendarNext", "Следующий месяц"),
    ("liveStreamTitle", "Прямой эфир"),
    ("notAvailable", "Н/Д"),
];

fn builtin(locale: Locale) -> &'static [(&'static str, &'static str)] {
    match locale {
        Locale::Ru => BUILTIN_RU,
        Locale::En => BUILTIN_EN,
    }
}

/// Merged string tables for every supported locale.
#[derive(Debug, Clone)]
pub struct Translations {
    default_locale: Locale,
    tables: BTreeMap<Locale, BTreeMap<String, String>>,
}

impl Translations {
    /// Built-in tables only.
    pub fn builtin(default_locale: Locale) -> Self {
        let tables = Locale::ALL
            .iter()
            .map(|&locale| {
                let table = builtin(locale)
                    .iter()
                    .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
                    .collect();
                (locale, table)
            })
            .collect();
        Self { default_locale, tables }
    }

    /// Built-in tables with overrides keyed by locale code.
    ///
    /// Unknown locale codes are skipped.
    pub fn with_overrides(
        default_locale: Locale,
        overrides: &BTreeMap<String, BTreeMap<String, String>>,
    ) -> Self {
        let mut translations = Self::builtin(default_locale);
        for (code, strings) in overrides {
            let Ok(locale) = code.parse::<Locale>() else {
                debug!(locale = %code, "Skipping strings for unsupported locale");
                continue;
            };
            let table = translations.tables.entry(locale).or_default();
            table.extend(strings.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        translations
    }

    pub fn default_locale(&self) -> Locale {
        self.default_locale
    }

    /// Resolve `key` for `locale`, falling back to the default locale and
    /// finally to the key itself. Empty values count as missing.
    pub fn get<'a>(&'a self, locale: Locale, key: &'a str) -> &'a str {
        [locale, self.default_locale]
            .iter()
            .filter_map(|l| self.tables.get(l).and_then(|t| t.get(key)))
            .find(|value| !value.is_empty())
            .map(String::as_str)
            .unwrap_or(key)
    }

    pub fn month_name(&self, locale: Locale, month0: u32) -> &'static str {
        let names = match locale {
            Locale::Ru => &MONTHS_RU,
            Locale::En => &MONTHS_EN,
        };
        names[(month0 as usize) % names.len()]
    }

    /// Weekday abbreviations, Monday first.
    pub fn weekday_names(&self, locale: Locale) -> &'static [&'static str; 7] {
        match locale {
            Locale::Ru => &WEEKDAYS_RU,
            Locale::En => &WEEKDAYS_EN,
        }
    }
}

impl Default for Translations {
    fn default() -> Self {
        Self::builtin(Locale::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overrides(entries: &[(&str, &str, &str)]) -> BTreeMap<String, BTreeMap<String, String>> {
        let mut map: BTreeMap<String, BTreeMap<String, String>> = BTreeMap::new();
        for (locale, key, value) in entries {
            map.entry((*locale).to_string()).or_default().insert((*key).to_string(), (*value).to_string());
        }
        map
    }

    #[test]
    fn builtin_tables_cover_both_locales() {
        let t = Translations::builtin(Locale::Ru);
        assert_eq!(t.get(Locale::En, "loading"), "Loading...");
        assert_eq!(t.get(Locale::Ru, "loading"), "Загрузка...");
        for (key, _) in BUILTIN_EN {
            assert!(BUILTIN_RU.iter().any(|(k, _)| k == key), "missing ru string {key}");
        }
    }

    #[test]
    fn falls_back_to_default_locale_then_key() {
        let t = Translations::with_overrides(
            Locale::Ru,
            &overrides(&[("ru", "profileName", "Канал"), ("en", "emptyOne", "")]),
        );
        assert_eq!(t.get(Locale::En, "profileName"), "Канал");
        assert_eq!(t.get(Locale::En, "unknownKey"), "unknownKey");
        assert_eq!(t.get(Locale::En, "emptyOne"), "emptyOne");
    }

    #[test]
    fn overrides_replace_builtins() {
        let t = Translations::with_overrides(
            Locale::Ru,
            &overrides(&[("en", "loading", "Fetching…"), ("de", "loading", "Laden")]),
        );
        assert_eq!(t.get(Locale::En, "loading"), "Fetching…");
        assert_eq!(t.get(Locale::Ru, "loading"), "Загрузка...");
    }

    #[test]
    fn calendar_labels() {
        let t = Translations::default();
        assert_eq!(t.month_name(Locale::En, 1), "February");
        assert_eq!(t.month_name(Locale::Ru, 11), "Декабрь");
        assert_eq!(t.weekday_names(Locale::En)[4], "Fri");
        assert_eq!(t.weekday_names(Locale::Ru)[0], "Пн");
    }
}
