use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Policy deciding which atoms may carry a label.
///
/// Rules are usually selected by name. Unrecognized names fall back to
/// [`LabelRule::CarbonOnly`] rather than failing:
///
/// ```
/// use chemlabel::LabelRule;
///
/// assert_eq!(LabelRule::from_name("proton_rule"), LabelRule::ProtonRule);
/// assert_eq!(LabelRule::from_name("iupac"), LabelRule::CarbonOnly);
/// assert_eq!("carbon_only".parse::<LabelRule>(), Ok(LabelRule::CarbonOnly));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LabelRule {
    /// Only carbon atoms are labeled. Labels come from the structure's
    /// `_AV:` annotation.
    #[default]
    CarbonOnly,
    /// Carbons plus every hydrogen-bearing heteroatom, i.e. the positions
    /// that show up in a ¹H NMR spectrum. Labels are generated.
    ProtonRule,
}

impl LabelRule {
    pub const ALL: [LabelRule; 2] = [LabelRule::CarbonOnly, LabelRule::ProtonRule];

    pub fn from_name(name: &str) -> LabelRule {
        match name {
            "proton_rule" => LabelRule::ProtonRule,
            "carbon_only" => LabelRule::CarbonOnly,
            other => {
                log::debug!("unknown label rule {other:?}, using carbon_only");
                LabelRule::CarbonOnly
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LabelRule::CarbonOnly => "carbon_only",
            LabelRule::ProtonRule => "proton_rule",
        }
    }

    /// Whether labels under this rule are generated rather than taken from
    /// the input annotation.
    pub fn generates_labels(self) -> bool {
        matches!(self, LabelRule::ProtonRule)
    }
}

impl FromStr for LabelRule {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(LabelRule::from_name(s))
    }
}

impl fmt::Display for LabelRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
