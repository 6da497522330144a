//! Packing list generation

use tracing::debug;

use crate::fetchers::Fetchers;

/// Build the packing checklist for a trip, consulting the weather once.
///
/// When the weather service is down the fallback line never mentions rain,
/// so the list recommends sunglasses.
pub async fn generate_packing_list(fetchers: &Fetchers, city: &str, days: u32) -> String {
    let weather = fetchers.weather_line(city).await;
    packing_list_for_weather(city, days, &weather)
}

/// Packing checklist given an already-fetched weather line
#[must_use]
pub fn packing_list_for_weather(city: &str, days: u32, weather: &str) -> String {
    let rainy = weather.to_lowercase().contains("rain");
    debug!(city, rainy, "Composing packing list");

    let weather_item = if rainy { "Umbrella ☔" } else { "Sunglasses 🕶️" };
    format!(
        "🧳 Pack for {days} days in {city}:\n    \
         - {days} outfits (mix & match)\n    \
         - {weather_item}\n    \
         - Comfortable walking shoes\n    \
         - Universal power adapter\n    \
         - Portable charger"
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::fetchers::stub::StubSource;

    #[test]
    fn test_rain_means_umbrella() {
        let list = packing_list_for_weather("Paris", 5, "☁️ Light Rain Shower +11°C");
        assert!(list.contains("Umbrella ☔"));
        assert!(!list.contains("Sunglasses"));
    }

    #[test]
    fn test_dry_weather_means_sunglasses() {
        let list = packing_list_for_weather("Tokyo", 7, "☁️ Sunny +28°C");
        assert!(list.contains("Sunglasses 🕶️"));
        assert!(!list.contains("Umbrella"));
    }

    #[test]
    fn test_layout() {
        let list = packing_list_for_weather("Paris", 3, "☁️ Clear +20°C");
        let lines: Vec<&str> = list.lines().collect();
        assert_eq!(
            lines,
            vec![
                "🧳 Pack for 3 days in Paris:",
                "    - 3 outfits (mix & match)",
                "    - Sunglasses 🕶️",
                "    - Comfortable walking shoes",
                "    - Universal power adapter",
                "    - Portable charger",
            ]
        );
    }

    #[tokio::test]
    async fn test_unavailable_weather_means_sunglasses() {
        let fetchers = Fetchers::new(Arc::new(StubSource::default()), 50);
        let list = generate_packing_list(&fetchers, "Paris", 4).await;
        assert!(list.contains("Sunglasses 🕶️"));
        assert!(list.contains("4 outfits"));
    }

    #[tokio::test]
    async fn test_consults_weather_once() {
        let source = Arc::new(StubSource::with_weather("Heavy rain +9°C"));
        let fetchers = Fetchers::new(source.clone(), 50);
        let list = generate_packing_list(&fetchers, "London", 2).await;
        assert!(list.contains("Umbrella ☔"));
        assert_eq!(
            source
                .weather_calls
                .load(std::sync::atomic::Ordering::SeqCst),
            1
        );
    }
}
