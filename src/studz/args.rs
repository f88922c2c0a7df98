use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "studz")]
#[command(about = "A pocket study catalog for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse quiz topics by section
    #[command(alias = "b")]
    Browse {
        /// Search term matched against titles, descriptions, and tags
        #[arg(required = false)]
        query: Option<String>,

        /// Keep only topics carrying this tag (repeat to stack, repeat twice to clear)
        #[arg(short, long)]
        tag: Vec<String>,

        /// Keep only topics of this difficulty (1-3 or beginner/intermediate/advanced)
        #[arg(short, long)]
        level: Vec<String>,

        /// Show the popular strip instead of the full catalog
        #[arg(long)]
        popular: bool,
    },

    /// List upcoming events
    #[command(alias = "ev")]
    Events {
        /// Search term
        #[arg(required = false)]
        query: Option<String>,

        /// Keep only events carrying this tag
        #[arg(short, long)]
        tag: Vec<String>,

        /// Keep only events of this kind (hackathon, training, workshop, ...)
        #[arg(short, long)]
        kind: Vec<String>,

        /// Keep only events on this day (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Search categories and subjects, like the home overlay
    Explore {
        /// Search term
        query: String,

        /// School code (defaults to the signed-in profile's school)
        #[arg(long)]
        school: Option<String>,
    },

    /// List a school's subjects and documents
    Subjects {
        /// Search term matched against subject titles and document names
        #[arg(required = false)]
        query: Option<String>,

        /// School code (defaults to the signed-in profile's school)
        #[arg(long)]
        school: Option<String>,
    },

    /// List quizzes for a topic
    #[command(alias = "q")]
    Quizzes {
        /// Topic title, e.g. "Programming"
        topic: String,
    },

    /// Bookmark a catalog entry (or un-bookmark if already saved)
    Save {
        /// Title words (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// Remove a bookmark
    Unsave {
        /// Title words (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// List bookmarked entries
    Saved,

    /// Ask the study assistant a question
    Ask {
        /// The question (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },

    /// Download a course document into the local cache
    Fetch {
        /// Document URL
        url: String,

        /// Open the document with the system handler after fetching
        #[arg(long)]
        open: bool,
    },

    /// Sign in to the course backend
    Login {
        /// Account email
        #[arg(long)]
        email: String,

        /// Account password (prompted on stdin if omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Create an account on the course backend
    Signup {
        #[arg(long)]
        first_name: String,

        #[arg(long)]
        last_name: String,

        #[arg(long)]
        email: String,

        /// Account password (prompted on stdin if omitted)
        #[arg(long)]
        password: Option<String>,

        /// School code, e.g. school_a
        #[arg(long)]
        school: String,

        #[arg(long)]
        class: String,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., assistant-model)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Initialize the local directories (optional utility)
    Init,
}
