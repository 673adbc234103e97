use std::ffi::OsString;

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Id of the user whose profile fills the header.
    #[clap(short = 'u', long, default_value_t = 1, help = "current user id")]
    user: u64,

    /// How many posts to load on startup.
    #[clap(short = 'l', long, default_value_t = 5, help = "number of posts to load")]
    limit: usize,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    user: u64,
    limit: usize,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        let args = ClapArgs::parse();
        Self {
            user: args.user,
            limit: args.limit,
        }
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = ClapArgs::parse_from(itr);
        Self {
            user: args.user,
            limit: args.limit,
        }
    }

    pub fn user(&self) -> u64 {
        self.user
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_values() {
        let args = CommandLineArgs::parse_from(["program"]);
        assert_eq!(args.user(), 1);
        assert_eq!(args.limit(), 5);
    }

    #[test]
    fn test_parse_args_long_flags() {
        let args = CommandLineArgs::parse_from(["program", "--user", "3", "--limit", "2"]);
        assert_eq!(args.user(), 3);
        assert_eq!(args.limit(), 2);
    }

    #[test]
    fn test_parse_args_short_flags() {
        let args = CommandLineArgs::parse_from(["program", "-u", "9", "-l", "10"]);
        assert_eq!(args.user(), 9);
        assert_eq!(args.limit(), 10);
    }
}
