//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat, PaginateArgs};
use crate::config::{load_config, PaginatorConfig};
use crate::error::{Result, ResultExt};
use crate::paginator::Paginator;
use crate::render::{HtmlRenderer, JsonRenderer, Renderer};
use crate::types::{NavigationLink, PageItem, View};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command and print its output
    pub fn run(&self) -> Result<()> {
        let output = self.execute()?;
        println!("{output}");
        Ok(())
    }

    /// Run the CLI command and return its output
    pub fn execute(&self) -> Result<String> {
        match &self.cli.command {
            Commands::Render { args, view } => self.render(args, view.as_deref()),
            Commands::Pages { args } => self.pages(args),
            Commands::Info { args } => self.info(args),
        }
    }

    /// Load the config file, or the defaults when none was given
    fn load_config(&self) -> Result<PaginatorConfig> {
        match &self.cli.config {
            Some(path) => load_config(path)
                .with_context(|| format!("Failed to load config {}", path.display())),
            None => Ok(PaginatorConfig::default()),
        }
    }

    /// Build a paginator from the config file and command-line overrides
    fn build_paginator(&self, args: &PaginateArgs) -> Result<Paginator> {
        let mut config = self.load_config()?;

        if let Some(max_pages) = args.max_pages {
            config.max_pages_to_show = max_pages;
        }
        if let Some(url_pattern) = &args.url_pattern {
            config.url_pattern.clone_from(url_pattern);
        }
        if let Some(placeholder) = &args.placeholder {
            config.placeholder.clone_from(placeholder);
        }
        if let Some(prev_text) = &args.prev_text {
            config.previous_text.clone_from(prev_text);
        }
        if let Some(next_text) = &args.next_text {
            config.next_text.clone_from(next_text);
        }
        if let Some(ellipsis) = &args.ellipsis {
            config.ellipsis.clone_from(ellipsis);
        }

        tracing::debug!(
            total = args.total,
            per_page = args.per_page,
            page = args.page,
            max_pages_to_show = config.max_pages_to_show,
            "Building paginator"
        );

        Paginator::with_config(args.total, args.per_page, args.page, config)
    }

    /// Render markup
    fn render(&self, args: &PaginateArgs, view: Option<&str>) -> Result<String> {
        let paginator = self.build_paginator(args)?;
        let renderer = match view {
            Some(name) => HtmlRenderer::with_view(View::parse(name)),
            None => HtmlRenderer::new(),
        };
        paginator.render_with(&renderer)
    }

    /// Print the page window
    fn pages(&self, args: &PaginateArgs) -> Result<String> {
        let paginator = self.build_paginator(args)?;
        let pages = paginator.pages();

        match self.cli.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&pages)?),
            OutputFormat::Pretty => Ok(format_window(&pages)),
        }
    }

    /// Print paginator state
    fn info(&self, args: &PaginateArgs) -> Result<String> {
        let paginator = self.build_paginator(args)?;

        match self.cli.format {
            OutputFormat::Json => JsonRenderer::pretty().render(&paginator),
            OutputFormat::Pretty => Ok(format_info(&paginator)),
        }
    }
}

/// One line, current page in brackets
fn format_window(pages: &[PageItem]) -> String {
    pages
        .iter()
        .map(|page| {
            if page.is_current {
                format!("[{}]", page.label)
            } else {
                page.label.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_info(paginator: &Paginator) -> String {
    let items = paginator
        .current_page_item_range()
        .map_or_else(|| "none".to_string(), |range| format!("{}-{}", range.first, range.last));
    let link = |link: Option<NavigationLink>| {
        link.map_or_else(
            || "none".to_string(),
            |link| format!("{} ({})", link.page, link.url),
        )
    };

    [
        format!("total items:    {}", paginator.total_items()),
        format!("items per page: {}", paginator.items_per_page()),
        format!("current page:   {}", paginator.current_page()),
        format!("pages:          {}", paginator.num_pages()),
        format!("items:          {items}"),
        format!("previous:       {}", link(paginator.prev_link())),
        format!("next:           {}", link(paginator.next_link())),
    ]
    .join("\n")
}
