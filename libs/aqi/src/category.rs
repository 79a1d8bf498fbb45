//! EPA AQI categories and their reporting colors.

use core::fmt;

/// Color enum provides colors corresponding to EPA AQI levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    Green,
    Yellow,
    Orange,
    Red,
    Purple,
    DarkPurple,
}

impl Color {
    /// RGB hex code from the AirNow reporting guidance.
    pub const fn hex(self) -> &'static str {
        match self {
            Color::Green => "#00E400",
            Color::Yellow => "#FFFF00",
            Color::Orange => "#FF7E00",
            Color::Red => "#FF0000",
            Color::Purple => "#8F3F97",
            Color::DarkPurple => "#7E0023",
        }
    }
}

/// Health concern level for an AQI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl Category {
    /// Provides the category for an AQI value. Values above 500 are still
    /// hazardous.
    ///
    /// # Examples
    ///
    /// ```
    /// use aqi::{Category, Color};
    ///
    /// let category = Category::from_aqi(115);
    /// assert_eq!(category, Category::UnhealthyForSensitiveGroups);
    /// assert_eq!(category.color(), Color::Orange);
    /// ```
    pub const fn from_aqi(aqi: u16) -> Self {
        match aqi {
            0..=50 => Category::Good,
            51..=100 => Category::Moderate,
            101..=150 => Category::UnhealthyForSensitiveGroups,
            151..=200 => Category::Unhealthy,
            201..=300 => Category::VeryUnhealthy,
            _ => Category::Hazardous,
        }
    }

    pub const fn color(self) -> Color {
        match self {
            Category::Good => Color::Green,
            Category::Moderate => Color::Yellow,
            Category::UnhealthyForSensitiveGroups => Color::Orange,
            Category::Unhealthy => Color::Red,
            Category::VeryUnhealthy => Color::Purple,
            Category::Hazardous => Color::DarkPurple,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::Good => "Good",
            Category::Moderate => "Moderate",
            Category::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            Category::Unhealthy => "Unhealthy",
            Category::VeryUnhealthy => "Very Unhealthy",
            Category::Hazardous => "Hazardous",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_aqi() {
        assert_eq!(Category::from_aqi(0), Category::Good);
        assert_eq!(Category::from_aqi(50), Category::Good);
        assert_eq!(Category::from_aqi(51), Category::Moderate);
        assert_eq!(Category::from_aqi(100), Category::Moderate);
        assert_eq!(Category::from_aqi(101), Category::UnhealthyForSensitiveGroups);
        assert_eq!(Category::from_aqi(150), Category::UnhealthyForSensitiveGroups);
        assert_eq!(Category::from_aqi(151), Category::Unhealthy);
        assert_eq!(Category::from_aqi(200), Category::Unhealthy);
        assert_eq!(Category::from_aqi(201), Category::VeryUnhealthy);
        assert_eq!(Category::from_aqi(300), Category::VeryUnhealthy);
        assert_eq!(Category::from_aqi(301), Category::Hazardous);
        assert_eq!(Category::from_aqi(500), Category::Hazardous);
        assert_eq!(Category::from_aqi(999), Category::Hazardous);
    }

    #[test]
    fn test_color() {
        assert_eq!(Category::from_aqi(25).color(), Color::Green);
        assert_eq!(Category::from_aqi(75).color(), Color::Yellow);
        assert_eq!(Category::from_aqi(125).color(), Color::Orange);
        assert_eq!(Category::from_aqi(175).color(), Color::Red);
        assert_eq!(Category::from_aqi(250).color(), Color::Purple);
        assert_eq!(Category::from_aqi(400).color(), Color::DarkPurple);
        assert_eq!(Color::DarkPurple.hex(), "#7E0023");
    }
}
