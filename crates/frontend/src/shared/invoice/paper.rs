/// Print layout target for a generated invoice. Thermal widths get the
/// narrow monospaced receipt layout; the rest get the full page invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaperProfile {
    Thermal80,
    Thermal58,
    A4,
    A5,
    Letter,
}

impl PaperProfile {
    pub fn display_name(&self) -> &'static str {
        match self {
            PaperProfile::Thermal80 => "80mm thermal",
            PaperProfile::Thermal58 => "58mm thermal",
            PaperProfile::A4 => "A4",
            PaperProfile::A5 => "A5",
            PaperProfile::Letter => "Letter",
        }
    }

    /// Value used by the profile `<select>` control.
    pub fn code(&self) -> &'static str {
        match self {
            PaperProfile::Thermal80 => "thermal-80",
            PaperProfile::Thermal58 => "thermal-58",
            PaperProfile::A4 => "a4",
            PaperProfile::A5 => "a5",
            PaperProfile::Letter => "letter",
        }
    }

    /// CSS `@page` size declaration.
    pub fn page_size_css(&self) -> &'static str {
        match self {
            PaperProfile::Thermal80 => "80mm auto",
            PaperProfile::Thermal58 => "58mm auto",
            PaperProfile::A4 => "A4",
            PaperProfile::A5 => "A5",
            PaperProfile::Letter => "letter",
        }
    }

    /// Content width inside the printable area.
    pub fn body_width_css(&self) -> &'static str {
        match self {
            PaperProfile::Thermal80 => "72mm",
            PaperProfile::Thermal58 => "50mm",
            PaperProfile::A4 => "180mm",
            PaperProfile::A5 => "120mm",
            PaperProfile::Letter => "186mm",
        }
    }

    pub fn is_thermal(&self) -> bool {
        matches!(self, PaperProfile::Thermal80 | PaperProfile::Thermal58)
    }

    pub fn all() -> Vec<PaperProfile> {
        vec![
            PaperProfile::Thermal80,
            PaperProfile::Thermal58,
            PaperProfile::A4,
            PaperProfile::A5,
            PaperProfile::Letter,
        ]
    }

    pub fn parse(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|p| p.code() == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_codes() {
        for profile in PaperProfile::all() {
            assert_eq!(PaperProfile::parse(profile.code()), Some(profile));
        }
        assert_eq!(PaperProfile::parse("a3"), None);
    }

    #[test]
    fn test_thermal_detection() {
        assert!(PaperProfile::Thermal80.is_thermal());
        assert!(PaperProfile::Thermal58.is_thermal());
        assert!(!PaperProfile::A4.is_thermal());
        assert!(!PaperProfile::Letter.is_thermal());
    }
}
