//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};

use crate::render::DEFAULT_OPTION_TEMPLATE;

/// Render flat parent-referencing records as trees, option lists and menus
#[derive(Parser, Debug)]
#[command(name = "fasttree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output, repeat for more (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// JSON records: an array or an object keyed by id ("-" reads stdin)
    #[arg(short, long, global = true, env = "FASTTREE_FILE", default_value = "-", value_hint = ValueHint::FilePath)]
    pub file: PathBuf,

    /// Config file (overrides the global config)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Parent-reference field name
    #[arg(long, global = true)]
    pub pid_name: Option<String>,

    /// Indentation token appended per level
    #[arg(long, global = true)]
    pub nbsp: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Query root plus `--with-self` / `--ids` for lookups and closures.
#[derive(Args, Debug, Clone)]
pub struct ClosureArgs {
    /// Node id
    pub id: String,
    /// Include the node itself
    #[arg(short = 's', long)]
    pub with_self: bool,
    /// Print ids only
    #[arg(long)]
    pub ids: bool,
}

/// Selected/disabled marks as comma-separated ids.
#[derive(Args, Debug, Clone, Default)]
pub struct MarkArgs {
    /// Selected ids, e.g. "2,5"
    #[arg(long, default_value = "")]
    pub selected: String,
    /// Disabled ids, e.g. "3"
    #[arg(long, default_value = "")]
    pub disabled: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Direct children of a node
    Children {
        /// Node id
        id: String,
    },

    /// Parent of a node
    Parent {
        /// Node id
        id: String,
    },

    /// All nodes below a node, depth-first
    Descendants(ClosureArgs),

    /// All nodes above a node, root first
    Ancestors(ClosureArgs),

    /// Indented option list
    Options {
        /// Root id
        #[arg(default_value = "0")]
        id: String,
        /// Item template
        #[arg(short, long, default_value = DEFAULT_OPTION_TEMPLATE)]
        template: String,
        /// Template for top-level nodes and nodes with children
        #[arg(long)]
        top_template: Option<String>,
        #[command(flatten)]
        marks: MarkArgs,
        /// Prefix seed
        #[arg(long, default_value = "")]
        prefix: String,
    },

    /// Nested list markup
    Ul {
        /// Root id
        #[arg(default_value = "0")]
        id: String,
        /// Item template with @childlist
        #[arg(short, long, default_value = "<li>@name@childlist</li>")]
        template: String,
        #[command(flatten)]
        marks: MarkArgs,
        /// Tag wrapping child lists
        #[arg(long, default_value = "ul")]
        wrap_tag: String,
        /// Attributes of the wrap tag
        #[arg(long, default_value = "")]
        wrap_attr: String,
    },

    /// Navigation menu markup
    Menu {
        /// Root id
        #[arg(default_value = "0")]
        id: String,
        /// Item template with @url, @caret, @class, @childlist
        #[arg(
            short,
            long,
            default_value = r#"<li class="@class"><a href="@url@addtabs">@name @caret @badge</a>@childlist</li>"#
        )]
        template: String,
        #[command(flatten)]
        marks: MarkArgs,
        /// Tag wrapping child lists
        #[arg(long, default_value = "ul")]
        wrap_tag: String,
        /// Attributes of the wrap tag (@class becomes "last")
        #[arg(long, default_value = r#"class="treeview-menu""#)]
        wrap_attr: String,
    },

    /// Option list with separate templates for enabled and disabled nodes
    Dual {
        /// Root id
        #[arg(default_value = "0")]
        id: String,
        /// Template for enabled nodes
        #[arg(long)]
        enabled: String,
        /// Template for disabled nodes
        #[arg(long)]
        disabled_template: String,
        #[command(flatten)]
        marks: MarkArgs,
        /// Prefix seed
        #[arg(long, default_value = "")]
        prefix: String,
    },

    /// Nested tree array as JSON
    Array {
        /// Root id
        #[arg(default_value = "0")]
        id: String,
        /// Prefix seed
        #[arg(long, default_value = "")]
        prefix: String,
    },

    /// Flattened, indented records as JSON
    List {
        /// Root id
        #[arg(default_value = "0")]
        id: String,
        /// Field receiving the spacer
        #[arg(long, default_value = "name")]
        field: String,
    },

    /// Print the tree
    Show {
        /// Root id
        #[arg(default_value = "0")]
        id: String,
        /// Field used as node label
        #[arg(long, default_value = "name")]
        label: String,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,
    /// Print a template config file
    Template,
}
