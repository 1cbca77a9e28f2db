//! Categorical enumerations of a property record.
//!
//! Each enumeration knows the column prefix it expands under and the exact
//! level labels the model was trained on. Labels are data, so they keep their
//! original spelling (including Turkish letters and spaces).

use crate::error::{RecordError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A closed set of levels for one categorical field.
pub trait Categorical: Copy + Sized + 'static {
    /// Column prefix used by one-hot expansion.
    const FIELD: &'static str;

    /// All levels, in canonical order.
    fn all() -> Vec<Self>;

    /// Level label as it appears in the training data.
    fn label(&self) -> &'static str;

    /// One-hot column name of this level.
    fn column(&self) -> String {
        one_hot_column(Self::FIELD, self.label())
    }
}

/// Name of the one-hot column for `level` of `field`.
pub fn one_hot_column(field: &str, level: &str) -> String {
    format!("{field}_{level}")
}

/// ASCII slug of a label: Turkish letters folded, everything else that is not
/// alphanumeric collapsed into single dashes.
pub fn slug(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.trim().chars() {
        let folded = match c {
            'ç' | 'Ç' => 'c',
            'ğ' | 'Ğ' => 'g',
            'ı' | 'I' | 'İ' => 'i',
            'ö' | 'Ö' => 'o',
            'ş' | 'Ş' => 's',
            'ü' | 'Ü' => 'u',
            c if c.is_ascii_alphanumeric() => c.to_ascii_lowercase(),
            _ => '-',
        };
        if folded == '-' && (out.is_empty() || out.ends_with('-')) {
            continue;
        }
        out.push(folded);
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}

/// Parse a level from its exact label or its slug.
pub fn parse_level<T: Categorical>(input: &str) -> Result<T> {
    let trimmed = input.trim();
    let levels = T::all();
    if let Some(level) = levels.iter().find(|l| l.label() == trimmed) {
        return Ok(*level);
    }

    let wanted = slug(trimmed);
    levels
        .into_iter()
        .find(|l| slug(l.label()) == wanted)
        .ok_or_else(|| RecordError::UnknownLevel {
            field: T::FIELD,
            level: input.to_string(),
        })
}

macro_rules! categorical {
    (
        $(#[$meta:meta])*
        $name:ident, field = $field:literal {
            $($(#[$vmeta:meta])* $variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[doc = $label]
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl Categorical for $name {
            const FIELD: &'static str = $field;

            fn all() -> Vec<Self> {
                vec![$(Self::$variant),+]
            }

            fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = RecordError;

            fn from_str(s: &str) -> Result<Self> {
                parse_level(s)
            }
        }
    };
}

categorical! {
    /// Istanbul municipality (39 districts).
    District, field = "ilce" {
        #[default]
        Adalar => "Adalar",
        Arnavutkoy => "Arnavutköy",
        Atasehir => "Ataşehir",
        Avcilar => "Avcılar",
        Bagcilar => "Bağcılar",
        Bahcelievler => "Bahçelievler",
        Bakirkoy => "Bakırköy",
        Basaksehir => "Başakşehir",
        Bayrampasa => "Bayrampaşa",
        Besiktas => "Beşiktaş",
        Beykoz => "Beykoz",
        Beylikduzu => "Beylikdüzü",
        Beyoglu => "Beyoğlu",
        Buyukcekmece => "Büyükçekmece",
        Catalca => "Çatalca",
        Cekmekoy => "Çekmeköy",
        Esenler => "Esenler",
        Esenyurt => "Esenyurt",
        Eyupsultan => "Eyüpsultan",
        Fatih => "Fatih",
        Gaziosmanpasa => "Gaziosmanpaşa",
        Gungoren => "Güngören",
        Kadikoy => "Kadıköy",
        Kagithane => "Kağıthane",
        Kartal => "Kartal",
        Kucukcekmece => "Küçükçekmece",
        Maltepe => "Maltepe",
        Pendik => "Pendik",
        Sancaktepe => "Sancaktepe",
        Sariyer => "Sarıyer",
        Silivri => "Silivri",
        Sultanbeyli => "Sultanbeyli",
        Sultangazi => "Sultangazi",
        Sile => "Şile",
        Sisli => "Şişli",
        Tuzla => "Tuzla",
        Umraniye => "Ümraniye",
        Uskudar => "Üsküdar",
        Zeytinburnu => "Zeytinburnu",
    }
}

categorical! {
    /// Heating system of the unit.
    HeatingType, field = "isitma_tipi" {
        #[default]
        Combi => "Kombi",
        Central => "Merkezi Sistem",
        Underfloor => "Yerden Isıtma",
        Electric => "Klima/Elektrikli",
    }
}

categorical! {
    /// Who currently occupies the unit.
    OccupancyStatus, field = "kullanim_durumu" {
        #[default]
        OwnerOccupied => "Mülk Sahibi Oturuyor",
        Tenanted => "Kiracılı",
        Vacant => "Boş",
    }
}
