use crate::{
    config::{self, Config},
    dataset::{self, Events},
    geocoding::DatasetGazetteer,
    output::{self, OutputFormat},
};
use anyhow::{anyhow, bail, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use eventmap_core::{
    usecases::{self, LocationFilter, SearchArea, SearchCriteria},
    util::time::TimeWindow,
};
use eventmap_entities::{
    geo::{Distance, MapPoint},
    time::{parse_date, parse_time, DateTime},
};
use std::{
    io::{self, Write},
    path::PathBuf,
};
use time::{Date, OffsetDateTime, Time};

#[derive(Parser)]
#[command(name = "eventmap", version, about = "Search and map crawled cultural events")]
struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Events dataset (JSON), overrides the configuration
    #[arg(long, global = true, value_name = "FILE")]
    dataset: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search events by time, place, types and keywords
    Search(SearchArgs),
    /// List all event types and keywords of the dataset
    Vocabulary {
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Preset {
    /// From now on
    Future,
    /// The rest of today
    Today,
    /// The whole next day
    Tomorrow,
    /// From now until the end of the tenth day
    #[value(name = "next-10-days")]
    Next10Days,
}

#[derive(Debug, Args)]
struct SearchArgs {
    /// First day (YYYY-MM-DD), defaults to today
    #[arg(long, value_parser = parse_date, conflicts_with = "preset")]
    from: Option<Date>,

    /// Start time on the first day (HH:MM)
    #[arg(long, value_parser = parse_time, conflicts_with = "preset")]
    from_time: Option<Time>,

    /// Last day (YYYY-MM-DD), open-ended if missing
    #[arg(long, value_parser = parse_date, conflicts_with = "preset")]
    to: Option<Date>,

    /// End time on the last day (HH:MM)
    #[arg(long, value_parser = parse_time, requires = "to", conflicts_with = "preset")]
    to_time: Option<Time>,

    /// Predefined time window
    #[arg(long, value_enum)]
    preset: Option<Preset>,

    /// Only online events
    #[arg(long, conflicts_with = "physical")]
    online: bool,

    /// Only events with a physical venue
    #[arg(long)]
    physical: bool,

    /// Latitude of the search center
    #[arg(long, requires = "lng", allow_negative_numbers = true, conflicts_with_all = ["online", "near"])]
    lat: Option<f64>,

    /// Longitude of the search center
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    lng: Option<f64>,

    /// Place whose position is used as search center
    #[arg(long, conflicts_with = "online")]
    near: Option<String>,

    /// Radius around the search center in km
    #[arg(long, allow_negative_numbers = true, conflicts_with = "online")]
    radius: Option<f64>,

    /// Event type, may be repeated
    #[arg(long = "type", value_name = "TYPE")]
    types: Vec<String>,

    /// Keyword, may be repeated
    #[arg(long = "keyword", value_name = "KEYWORD")]
    keywords: Vec<String>,

    /// Include events that only overlap the time window
    #[arg(long, overrides_with = "no_ongoing")]
    ongoing: bool,

    /// Only events within the time window, overrides the configuration
    #[arg(long, overrides_with = "ongoing")]
    no_ongoing: bool,

    /// Include events lasting three weeks or longer
    #[arg(long, overrides_with = "no_long_term")]
    long_term: bool,

    /// Exclude events lasting three weeks or longer, overrides the configuration
    #[arg(long, overrides_with = "long_term")]
    no_long_term: bool,

    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

impl SearchArgs {
    fn time_window(&self, now: DateTime) -> TimeWindow {
        match self.preset {
            Some(Preset::Future) => TimeWindow::future(now),
            Some(Preset::Today) => TimeWindow::today(now),
            Some(Preset::Tomorrow) => TimeWindow::tomorrow(now),
            Some(Preset::Next10Days) => TimeWindow::next_days(now, 10),
            None => TimeWindow::new(
                self.from.unwrap_or(now.date()),
                self.from_time,
                self.to.map(|date| (date, self.to_time)),
            ),
        }
    }

    fn location_filter(&self, center: Option<MapPoint>, default_radius: Distance) -> Result<LocationFilter> {
        if self.radius.is_some() && center.is_none() {
            bail!("A search radius requires a search center (--lat/--lng or --near)");
        }
        if self.online {
            return Ok(LocationFilter::Online);
        }
        let Some(center) = center else {
            return Ok(if self.physical {
                LocationFilter::Physical(None)
            } else {
                LocationFilter::Any
            });
        };
        let radius = self
            .radius
            .map(Distance::from_kilometers)
            .unwrap_or(default_radius);
        Ok(LocationFilter::Physical(Some(SearchArea { center, radius })))
    }

    fn criteria(
        &self,
        now: DateTime,
        defaults: &config::Search,
        center: Option<MapPoint>,
    ) -> Result<SearchCriteria> {
        let mut criteria = SearchCriteria::new(self.time_window(now));
        criteria.location = self.location_filter(center, defaults.radius)?;
        criteria.types = self.types.clone();
        criteria.keywords = self.keywords.clone();
        criteria.ongoing = flag(self.ongoing, self.no_ongoing, defaults.ongoing);
        criteria.long_term = flag(self.long_term, self.no_long_term, defaults.long_term);
        Ok(criteria)
    }

    fn search_center(&self, events: &Events) -> Result<Option<MapPoint>> {
        if let (Some(lat), Some(lng)) = (self.lat, self.lng) {
            let center = MapPoint::try_from_lat_lng_deg(lat, lng)
                .ok_or_else(|| anyhow!("Invalid search center {lat},{lng}"))?;
            return Ok(Some(center));
        }
        match &self.near {
            Some(place) => {
                let gazetteer = DatasetGazetteer::new(events);
                Ok(Some(usecases::locate_search_center(&gazetteer, place)?))
            }
            None => Ok(None),
        }
    }
}

/// Resolves a `--flag`/`--no-flag` pair against the configured default.
fn flag(enabled: bool, disabled: bool, default: bool) -> bool {
    match (enabled, disabled) {
        (true, _) => true,
        (_, true) => false,
        _ => default,
    }
}

fn now() -> DateTime {
    let now = OffsetDateTime::now_local().unwrap_or_else(|err| {
        log::warn!("Unable to determine the local time ({err}), using UTC");
        OffsetDateTime::now_utc()
    });
    DateTime::new(now.date(), now.time())
}

fn search<W: Write>(out: &mut W, args: &SearchArgs, cfg: &Config, events: &Events) -> Result<()> {
    let center = args.search_center(events)?;
    let criteria = args.criteria(now(), &cfg.search, center)?;
    usecases::validate_criteria(&criteria)?;
    log::debug!("Searching with {criteria:?}");
    let outcome = usecases::search_events(events.values(), &criteria)?;
    let format = args.format.unwrap_or(cfg.output.format);
    output::write_search_results(out, &outcome, &criteria, format)
}

pub fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    let Cli {
        config,
        dataset,
        command,
    } = Cli::parse();

    let mut cfg = Config::try_load_from_file_or_default(config.as_ref())?;
    if let Some(path) = dataset {
        cfg.dataset.path = path;
    }

    let mut events = dataset::load_events(&cfg.dataset.path)?;
    if let Some(path) = &cfg.types.hierarchy {
        let hierarchy = dataset::load_type_hierarchy(path)?;
        usecases::associate_event_types(&hierarchy, events.values_mut(), &cfg.types.fallback_type);
    }

    let mut out = io::stdout().lock();
    match command {
        Command::Search(args) => search(&mut out, &args, &cfg, &events),
        Command::Vocabulary { json } => {
            let vocabulary = usecases::collect_vocabulary(events.values());
            output::write_vocabulary(&mut out, vocabulary, json)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventmap_core::usecases::Error;
    use eventmap_entities::{builders::*, event::Event, location::Area};
    use time::macros::{date, datetime, time};

    fn search_args(args: &[&str]) -> SearchArgs {
        let cli = Cli::try_parse_from(["eventmap", "search"].iter().chain(args)).unwrap();
        match cli.command {
            Command::Search(args) => args,
            Command::Vocabulary { .. } => unreachable!(),
        }
    }

    fn defaults() -> config::Search {
        config::Search {
            radius: Distance::from_kilometers(10.0),
            ongoing: false,
            long_term: false,
        }
    }

    const NOW: DateTime = datetime!(2024-06-01 14:37:12);

    #[test]
    fn explicit_time_window() {
        let args = search_args(&[
            "--from",
            "2024-06-01",
            "--from-time",
            "10:00",
            "--to",
            "2024-06-02",
        ]);
        let criteria = args.criteria(NOW, &defaults(), None).unwrap();
        assert_eq!(
            criteria.window,
            TimeWindow::new(
                date!(2024 - 06 - 01),
                Some(time!(10:00)),
                Some((date!(2024 - 06 - 02), None))
            )
        );
        assert_eq!(criteria.location, LocationFilter::Any);
    }

    #[test]
    fn default_time_window_starts_today() {
        let criteria = search_args(&[]).criteria(NOW, &defaults(), None).unwrap();
        assert_eq!(criteria.window.start, datetime!(2024-06-01 0:00));
        assert_eq!(criteria.window.end, None);
    }

    #[test]
    fn preset_time_windows() {
        let window = search_args(&["--preset", "tomorrow"]).time_window(NOW);
        assert_eq!(window.start, datetime!(2024-06-02 0:00));
        assert_eq!(window.end, Some(datetime!(2024-06-02 23:59)));

        let window = search_args(&["--preset", "next-10-days"]).time_window(NOW);
        assert_eq!(window.start, datetime!(2024-06-01 14:37));
        assert_eq!(window.end, Some(datetime!(2024-06-11 23:59)));
    }

    #[test]
    fn reject_conflicting_arguments() {
        let parse = |args: &[&str]| Cli::try_parse_from(["eventmap", "search"].iter().chain(args));
        assert!(parse(&["--online", "--physical"]).is_err());
        assert!(parse(&["--preset", "today", "--from", "2024-06-01"]).is_err());
        assert!(parse(&["--lat", "50.0"]).is_err());
        assert!(parse(&["--to-time", "10:00"]).is_err());
        assert!(parse(&["--from", "1.6.2024"]).is_err());
        assert!(parse(&["--online", "--radius", "5"]).is_err());
        assert!(parse(&["--online", "--lat", "50.0", "--lng", "14.0"]).is_err());
    }

    #[test]
    fn search_area_with_default_radius() {
        let args = search_args(&["--lat", "50.08", "--lng", "14.43"]);
        let center = args.search_center(&Events::new()).unwrap();
        let criteria = args.criteria(NOW, &defaults(), center).unwrap();
        assert_eq!(
            criteria.location,
            LocationFilter::Physical(Some(SearchArea {
                center: MapPoint::from_lat_lng_deg(50.08, 14.43),
                radius: Distance::from_kilometers(10.0),
            }))
        );
    }

    #[test]
    fn search_area_around_place() {
        let events: Events = [Event::build()
            .id("1")
            .pos(MapPoint::from_lat_lng_deg(49.19, 16.61))
            .area(Area::Default("Brno".into()))
            .finish()]
        .into_iter()
        .map(|e| (e.id.clone(), e))
        .collect();
        let args = search_args(&["--near", "brno", "--radius", "5"]);
        let center = args.search_center(&events).unwrap();
        let criteria = args.criteria(NOW, &defaults(), center).unwrap();
        let area = criteria.location.search_area().unwrap();
        assert_eq!(area.center, MapPoint::from_lat_lng_deg(49.19, 16.61));
        assert_eq!(area.radius, Distance::from_kilometers(5.0));

        let args = search_args(&["--near", "Praha"]);
        let err = args.search_center(&events).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::LocationNotFound(_))
        ));
    }

    #[test]
    fn radius_without_center() {
        let args = search_args(&["--radius", "5"]);
        assert!(args.criteria(NOW, &defaults(), None).is_err());
    }

    #[test]
    fn online_search_with_radius() {
        let mut args = search_args(&["--online"]);
        args.radius = Some(5.0);
        assert!(args.criteria(NOW, &defaults(), None).is_err());
    }

    #[test]
    fn override_configured_flags() {
        let mut configured = defaults();
        configured.ongoing = true;
        configured.long_term = true;

        let criteria = search_args(&[]).criteria(NOW, &configured, None).unwrap();
        assert!(criteria.ongoing);
        assert!(criteria.long_term);

        let args = search_args(&["--no-ongoing", "--no-long-term"]);
        let criteria = args.criteria(NOW, &configured, None).unwrap();
        assert!(!criteria.ongoing);
        assert!(!criteria.long_term);

        let args = search_args(&["--no-ongoing", "--ongoing"]);
        let criteria = args.criteria(NOW, &defaults(), None).unwrap();
        assert!(criteria.ongoing);
        assert!(!criteria.long_term);
    }

    #[test]
    fn invalid_radius_is_rejected_by_validation() {
        let args = search_args(&["--lat", "50.0", "--lng", "14.0", "--radius", "-1"]);
        let center = args.search_center(&Events::new()).unwrap();
        let criteria = args.criteria(NOW, &defaults(), center).unwrap();
        assert!(matches!(
            usecases::validate_criteria(&criteria),
            Err(Error::InvalidRadius)
        ));
    }

    #[test]
    fn filters_and_flags() {
        let mut defaults = defaults();
        defaults.long_term = true;
        let args = search_args(&[
            "--online",
            "--type",
            "hudba",
            "--type",
            "divadlo",
            "--keyword",
            "jazz",
            "--ongoing",
            "--format",
            "geojson",
        ]);
        let criteria = args.criteria(NOW, &defaults, None).unwrap();
        assert_eq!(criteria.location, LocationFilter::Online);
        assert_eq!(criteria.types, vec!["hudba", "divadlo"]);
        assert_eq!(criteria.keywords, vec!["jazz"]);
        assert!(criteria.ongoing);
        assert!(criteria.long_term);
        assert_eq!(args.format, Some(OutputFormat::Geojson));
    }
}
