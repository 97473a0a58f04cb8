use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "livetrack-server",
    author,
    version,
    about = "Serve timetable-based train and bus positions over HTTP",
    long_about = "Loads train and bus timetables once at startup and answers position \
                  queries by interpolating between scheduled stops at the current local time."
)]
pub struct Args {
    /// Train timetable JSON file
    #[arg(long, default_value = "data/train_routes.json")]
    pub train_data: PathBuf,

    /// Bus timetable JSON file
    #[arg(long, default_value = "data/bus_routes.json")]
    pub bus_data: PathBuf,

    /// Address to listen on
    #[arg(short, long, default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Verbose output (show debug messages)
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["livetrack-server"]).unwrap();
        assert_eq!(args.train_data, PathBuf::from("data/train_routes.json"));
        assert_eq!(args.bus_data, PathBuf::from("data/bus_routes.json"));
        assert_eq!(args.bind, "127.0.0.1:5000".parse::<SocketAddr>().unwrap());
        assert!(!args.verbose);
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "livetrack-server",
            "--train-data",
            "/srv/trains.json",
            "-b",
            "0.0.0.0:8080",
            "-v",
        ])
        .unwrap();
        assert_eq!(args.train_data, PathBuf::from("/srv/trains.json"));
        assert_eq!(args.bind.port(), 8080);
        assert!(args.verbose);
    }

    #[test]
    fn test_bad_address_rejected() {
        assert!(Args::try_parse_from(["livetrack-server", "--bind", "nowhere"]).is_err());
    }
}
