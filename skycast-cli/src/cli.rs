use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::warn;

use skycast_core::{
    Config, Coordinates, Error, ForecastProvider, GeoOptions, IpLookupSource, Location,
    OpenMeteoProvider, ThemeName, WeatherDisplay, closest_country, countries, country_by_code,
    current_location, default_location, normalize,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Weather dashboard for the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show current weather and the 7-day forecast.
    Show {
        /// ISO-2 country code, e.g. "JP".
        #[arg(long)]
        country: Option<String>,

        /// Latitude in decimal degrees; requires --longitude.
        #[arg(long, requires = "longitude", allow_negative_numbers = true)]
        latitude: Option<f64>,

        /// Longitude in decimal degrees; requires --latitude.
        #[arg(long, requires = "latitude", allow_negative_numbers = true)]
        longitude: Option<f64>,

        /// Geolocate by public IP address instead of picking a country.
        #[arg(long, conflicts_with_all = ["country", "latitude"])]
        locate: bool,
    },

    /// List the selectable countries.
    Countries,

    /// Show or set the dashboard theme.
    Theme {
        /// Theme name: white, dark, pink or contrasty. Omit to print the
        /// current one.
        name: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Show { country, latitude, longitude, locate } => {
                show(country, latitude.zip(longitude), locate).await
            }
            Command::Countries => {
                print_countries();
                Ok(())
            }
            Command::Theme { name } => theme(name),
        }
    }
}

async fn show(country: Option<String>, coords: Option<(f64, f64)>, locate: bool) -> Result<()> {
    let location = resolve_location(country, coords, locate).await?;

    let provider = OpenMeteoProvider::new();
    let payload = provider
        .fetch_forecast(location.coordinates())
        .await
        .with_context(|| format!("Failed to fetch the forecast for {}", location.name))?;

    let display = normalize(&payload, &location.name);
    let theme = load_theme();

    print!("{}", render(&display, theme));
    println!("Updated {}", chrono::Local::now().format("%H:%M"));

    Ok(())
}

/// Turn the CLI's location intent into a named location, in precedence
/// order: explicit country, explicit coordinates, IP geolocation,
/// interactive picker (with the London fallback when there is no terminal).
async fn resolve_location(
    country: Option<String>,
    coords: Option<(f64, f64)>,
    locate: bool,
) -> Result<Location> {
    if let Some(code) = country {
        let entry = country_by_code(&code)
            .ok_or(Error::UnknownCountry { code })
            .context("Try `skycast countries` for the list of codes")?;
        return Ok(Location {
            latitude: entry.coordinates.latitude,
            longitude: entry.coordinates.longitude,
            name: format!("{}, {}", entry.capital, entry.name),
            country: Some(entry.code.to_string()),
        });
    }

    if let Some((latitude, longitude)) = coords {
        let point = Coordinates { latitude, longitude };
        let closest = closest_country(point);
        return Ok(Location {
            latitude,
            longitude,
            name: format!("{}, {}", closest.capital, closest.name),
            country: Some(closest.code.to_string()),
        });
    }

    if locate {
        let source = IpLookupSource::new();
        return current_location(&source, &GeoOptions::default())
            .await
            .context("Could not geolocate this machine");
    }

    Ok(pick_country())
}

fn pick_country() -> Location {
    let names: Vec<&str> = countries().iter().map(|c| c.name).collect();

    match inquire::Select::new("Pick a country:", names).raw_prompt() {
        Ok(choice) => {
            let entry = countries()[choice.index];
            Location {
                latitude: entry.coordinates.latitude,
                longitude: entry.coordinates.longitude,
                name: format!("{}, {}", entry.capital, entry.name),
                country: Some(entry.code.to_string()),
            }
        }
        Err(e) => {
            // Non-interactive terminal or aborted prompt: fall back to the
            // default location rather than failing the whole command.
            warn!("country selection unavailable ({e}), using the default location");
            default_location()
        }
    }
}

fn print_countries() {
    for country in countries() {
        println!("{}  {:<14} {}", country.code, country.name, country.capital);
    }
}

fn theme(name: Option<String>) -> Result<()> {
    let mut cfg = Config::load()?;

    match name {
        None => {
            let current = cfg.theme();
            println!("Current theme: {} {} ({})", current.icon(), current.label(), current);
            println!("Available: {}", theme_list());
        }
        Some(name) => {
            let theme = ThemeName::try_from(name.as_str())?;
            cfg.set_theme(theme);
            cfg.save()?;
            println!("Theme set to {} {}", theme.icon(), theme.label());
        }
    }

    Ok(())
}

fn theme_list() -> String {
    ThemeName::all()
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn load_theme() -> ThemeName {
    match Config::load() {
        Ok(cfg) => cfg.theme(),
        Err(e) => {
            warn!("could not load config ({e}), using the default theme");
            ThemeName::default()
        }
    }
}

fn render(display: &WeatherDisplay, theme: ThemeName) -> String {
    let mut out = String::new();

    out.push_str(&format!("{} {}\n\n", theme.icon(), display.location));
    out.push_str(&format!(
        "{} {}  {}° (feels like {}°)\n",
        display.condition_icon, display.condition, display.temperature, display.feels_like
    ));
    out.push_str(&format!(
        "Humidity {}% · Wind {} km/h from {}°\n",
        display.humidity, display.wind_speed, display.wind_direction
    ));

    if !display.forecast.is_empty() {
        out.push('\n');
        for day in &display.forecast {
            out.push_str(&format!(
                "{:>9}  {} {:<28} {:>4}° / {:>4}°  {:>3}%\n",
                day.day_name, day.condition_icon, day.condition, day.high, day.low,
                day.precip_chance
            ));
        }
    }

    out
}
