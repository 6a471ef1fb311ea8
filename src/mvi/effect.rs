use std::fmt;

/// One-shot instruction to show a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEffect {
    InstantToast,
    OneSecToast,
    FiveSecToast,
}

impl ViewEffect {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::InstantToast => "Instant",
            Self::OneSecToast => "One sec",
            Self::FiveSecToast => "Five sec",
        }
    }

    #[must_use]
    pub const fn duration(self) -> ToastDuration {
        match self {
            Self::InstantToast => ToastDuration::Immediate,
            Self::OneSecToast => ToastDuration::Short,
            Self::FiveSecToast => ToastDuration::Long,
        }
    }
}

/// How long a toast stays up. The host decides what each category means in
/// wall time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastDuration {
    Immediate,
    Short,
    Long,
}

impl fmt::Display for ToastDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Immediate => "immediate",
            Self::Short => "short",
            Self::Long => "long",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_text_and_duration() {
        assert_eq!(ViewEffect::InstantToast.message(), "Instant");
        assert_eq!(ViewEffect::OneSecToast.message(), "One sec");
        assert_eq!(ViewEffect::FiveSecToast.message(), "Five sec");
        assert_eq!(ViewEffect::InstantToast.duration(), ToastDuration::Immediate);
        assert_eq!(ViewEffect::OneSecToast.duration(), ToastDuration::Short);
        assert_eq!(ViewEffect::FiveSecToast.duration(), ToastDuration::Long);
    }
}
