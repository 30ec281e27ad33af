//! Selectable option lists
//!
//! Reference data is owned by a collaborator; the core only asks for it through
//! [`OptionCatalog`]. [`StaticOptionCatalog`] carries the stock tables.

use crate::contract::{DateFormat, OptionEntry, TimeFormat};

/// Supplies enumerated options for selectable fields
pub trait OptionCatalog: Send + Sync {
    fn languages(&self) -> Vec<OptionEntry>;
    fn timezones(&self) -> Vec<OptionEntry>;
    fn currencies(&self) -> Vec<OptionEntry>;

    fn date_formats(&self) -> Vec<DateFormat> {
        DateFormat::ALL.to_vec()
    }

    fn time_formats(&self) -> Vec<TimeFormat> {
        TimeFormat::ALL.to_vec()
    }
}

const LANGUAGES: &[OptionEntry] = &[
    OptionEntry { code: "en", label: "English" },
    OptionEntry { code: "es", label: "Español" },
    OptionEntry { code: "fr", label: "Français" },
    OptionEntry { code: "de", label: "Deutsch" },
    OptionEntry { code: "it", label: "Italiano" },
    OptionEntry { code: "pt", label: "Português" },
    OptionEntry { code: "nl", label: "Nederlands" },
    OptionEntry { code: "ru", label: "Русский" },
    OptionEntry { code: "ja", label: "日本語" },
    OptionEntry { code: "zh", label: "中文" },
    OptionEntry { code: "ko", label: "한국어" },
];

const TIMEZONES: &[OptionEntry] = &[
    OptionEntry { code: "UTC-12:00", label: "UTC-12:00" },
    OptionEntry { code: "UTC-11:00", label: "UTC-11:00" },
    OptionEntry { code: "UTC-10:00", label: "UTC-10:00" },
    OptionEntry { code: "UTC-09:00", label: "UTC-09:00" },
    OptionEntry { code: "UTC-08:00", label: "UTC-08:00" },
    OptionEntry { code: "UTC-07:00", label: "UTC-07:00" },
    OptionEntry { code: "UTC-06:00", label: "UTC-06:00" },
    OptionEntry { code: "UTC-05:00", label: "UTC-05:00" },
    OptionEntry { code: "UTC-04:00", label: "UTC-04:00" },
    OptionEntry { code: "UTC-03:00", label: "UTC-03:00" },
    OptionEntry { code: "UTC-02:00", label: "UTC-02:00" },
    OptionEntry { code: "UTC-01:00", label: "UTC-01:00" },
    OptionEntry { code: "UTC+00:00", label: "UTC+00:00" },
    OptionEntry { code: "UTC+01:00", label: "UTC+01:00" },
    OptionEntry { code: "UTC+02:00", label: "UTC+02:00" },
    OptionEntry { code: "UTC+03:00", label: "UTC+03:00" },
    OptionEntry { code: "UTC+04:00", label: "UTC+04:00" },
    OptionEntry { code: "UTC+05:00", label: "UTC+05:00" },
    OptionEntry { code: "UTC+06:00", label: "UTC+06:00" },
    OptionEntry { code: "UTC+07:00", label: "UTC+07:00" },
    OptionEntry { code: "UTC+08:00", label: "UTC+08:00" },
    OptionEntry { code: "UTC+09:00", label: "UTC+09:00" },
    OptionEntry { code: "UTC+10:00", label: "UTC+10:00" },
    OptionEntry { code: "UTC+11:00", label: "UTC+11:00" },
    OptionEntry { code: "UTC+12:00", label: "UTC+12:00" },
];

const CURRENCIES: &[OptionEntry] = &[
    OptionEntry { code: "USD", label: "US Dollar" },
    OptionEntry { code: "EUR", label: "Euro" },
    OptionEntry { code: "GBP", label: "British Pound" },
    OptionEntry { code: "JPY", label: "Japanese Yen" },
    OptionEntry { code: "CAD", label: "Canadian Dollar" },
    OptionEntry { code: "AUD", label: "Australian Dollar" },
];

/// Built-in option tables
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticOptionCatalog;

impl OptionCatalog for StaticOptionCatalog {
    fn languages(&self) -> Vec<OptionEntry> {
        LANGUAGES.to_vec()
    }

    fn timezones(&self) -> Vec<OptionEntry> {
        TIMEZONES.to_vec()
    }

    fn currencies(&self) -> Vec<OptionEntry> {
        CURRENCIES.to_vec()
    }
}
