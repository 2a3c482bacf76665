#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Indicator {
    Gdp,
    Co2,
    AgriLand,
}

impl Indicator {
    pub const ALL: [Self; 3] = [Self::Gdp, Self::Co2, Self::AgriLand];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gdp => "gdp",
            Self::Co2 => "co2",
            Self::AgriLand => "agri",
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Gdp),
            1 => Some(Self::Co2),
            2 => Some(Self::AgriLand),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Gdp => 0,
            Self::Co2 => 1,
            Self::AgriLand => 2,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "gdp" => Some(Self::Gdp),
            "co2" => Some(Self::Co2),
            "agri" | "agri-land" | "agriland" => Some(Self::AgriLand),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Gdp => "GDP",
            Self::Co2 => "CO2",
            Self::AgriLand => "Agri. Land",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Gdp => "World GDP Growth (Annual %)",
            Self::Co2 => "World CO2 Emissions (kt)",
            Self::AgriLand => "World Agricultural Land (% of land area)",
        }
    }

    /// World Bank indicator code used in the request path.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Gdp => "NY.GDP.MKTP.KD.ZG",
            Self::Co2 => "EN.GHG.CO2.AG.MT.CE.AR5",
            Self::AgriLand => "AG.LND.AGRI.ZS",
        }
    }

    pub const fn per_page(self) -> u32 {
        match self {
            Self::Gdp => 100,
            Self::Co2 | Self::AgriLand => 30,
        }
    }

    /// Year range passed as `date=`; `None` lets the API pick.
    pub const fn date_range(self) -> Option<&'static str> {
        match self {
            Self::AgriLand => Some("2000:2023"),
            Self::Gdp | Self::Co2 => None,
        }
    }

    pub const fn axis_unit(self) -> &'static str {
        match self {
            Self::Gdp | Self::AgriLand => "%",
            Self::Co2 => "kt",
        }
    }

    pub fn format_value(self, value: f64) -> String {
        match self {
            Self::Gdp | Self::AgriLand => format!("{value:.1}%"),
            Self::Co2 => format!("{} kt", group_thousands(value)),
        }
    }
}

impl std::fmt::Display for Indicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Entries of the bottom navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Indicators,
    Chat,
    Classify,
}

impl Tab {
    pub const ALL: [Self; 3] = [Self::Indicators, Self::Chat, Self::Classify];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Indicators),
            1 => Some(Self::Chat),
            2 => Some(Self::Classify),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Indicators => 0,
            Self::Chat => 1,
            Self::Classify => 2,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Indicators => "API",
            Self::Chat => "Chat",
            Self::Classify => "Classify",
        }
    }
}

fn group_thousands(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
