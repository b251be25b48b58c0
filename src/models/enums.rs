use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unknown string for one of the string-backed enums below.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid {field} value: {value}")]
pub struct ParseEnumError {
    pub field: String,
    pub value: String,
}

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ParseEnumError {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(EntityType {
    Symptom => "symptom",
    BodyPart => "body_part",
    Duration => "duration",
    Severity => "severity",
});

str_enum!(SeverityLevel {
    Mild => "mild",
    Moderate => "moderate",
    Severe => "severe",
});

str_enum!(DurationUnit {
    Minutes => "minutes",
    Hours => "hours",
    Days => "days",
    Weeks => "weeks",
    Months => "months",
});

str_enum!(TimelineEntryType {
    UserInput => "user_input",
});

str_enum!(TurnRole {
    User => "user",
    Assistant => "assistant",
});

str_enum!(Language {
    Hindi => "hi",
    Hinglish => "hinglish",
    English => "en",
});

str_enum!(SymptomCategory {
    Respiratory => "respiratory",
    Cardiovascular => "cardiovascular",
    Gastrointestinal => "gastrointestinal",
    Neurological => "neurological",
    Musculoskeletal => "musculoskeletal",
    Dermatological => "dermatological",
    Infectious => "infectious",
});

str_enum!(TimeContext {
    Morning => "morning",
    Evening => "evening",
    Night => "night",
});

str_enum!(OnsetPattern {
    Acute => "acute",
    Chronic => "chronic",
});

str_enum!(Trigger {
    Food => "food",
    Exercise => "exercise",
    Stress => "stress",
});

str_enum!(TestStatus {
    Pending => "pending",
    Completed => "completed",
    Cancelled => "cancelled",
});
