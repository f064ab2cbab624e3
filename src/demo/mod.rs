pub mod bookshelf;
pub mod taxonomy;

use std::str::FromStr;

use anyhow::Result;
use console_tree::{
    write, write_with, ConsoleColor, ConsoleColors, DisplaySettings, NodeEnumerator, NodeWriter,
    PatternStyle, SettingsFile, Tree, TreeOutput,
};
use tracing::info;

use bookshelf::{Book, BookSeries, Bookshelf};
use taxonomy::{TaxonomicRank, TaxonomicRankCategory};

/// Rendering scenarios selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    Basics,
    Levels,
    Indent,
    Double,
    Colors,
    Custom,
    Fluent,
}

impl Scenario {
    pub const ALL: [Scenario; 7] = [
        Scenario::Basics,
        Scenario::Levels,
        Scenario::Indent,
        Scenario::Double,
        Scenario::Colors,
        Scenario::Custom,
        Scenario::Fluent,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Scenario::Basics => "basics",
            Scenario::Levels => "levels",
            Scenario::Indent => "indent",
            Scenario::Double => "double",
            Scenario::Colors => "colors",
            Scenario::Custom => "custom",
            Scenario::Fluent => "fluent",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Scenario::Basics => "Displays the tree with the default settings.",
            Scenario::Levels => "Displays the tree with a maximum of three levels.",
            Scenario::Indent => "Displays the tree with an indent of five characters.",
            Scenario::Double => "Displays the tree with double-line style connectors.",
            Scenario::Colors => "Displays the tree in Technicolor\u{ae}.",
            Scenario::Custom => "Displays some of the customization potential.",
            Scenario::Fluent => "Displays a tree with different types of nodes.",
        }
    }

    pub fn settings(self) -> DisplaySettings {
        let settings = DisplaySettings::new();
        match self {
            Scenario::Basics => settings,
            Scenario::Levels => settings.with_max_levels(3).with_indent_size(2),
            Scenario::Indent | Scenario::Fluent => settings.with_indent_size(5),
            Scenario::Double => settings
                .with_indent_size(2)
                .with_connector_patterns(PatternStyle::Double.patterns()),
            Scenario::Colors => settings
                .with_indent_size(2)
                .with_node_colors(ConsoleColors::new(ConsoleColor::Red, ConsoleColor::Yellow))
                .with_connector_colors(
                    ConsoleColors::default().with_foreground(ConsoleColor::Cyan),
                ),
            Scenario::Custom => {
                settings.with_connector_patterns(PatternStyle::Alternating.patterns())
            }
        }
    }

    pub fn run(self, out: &mut dyn TreeOutput, overrides: Option<&SettingsFile>) -> Result<()> {
        let settings = match overrides {
            Some(file) => file.apply(self.settings()),
            None => self.settings(),
        };
        info!(scenario = self.name(), ?settings, "running scenario");

        match self {
            Scenario::Custom => {
                let writer: &NodeWriter<'_, TaxonomicRank> = &write_rank;
                let enumerator: &NodeEnumerator<'_, TaxonomicRank> = &rank_members;
                write_with(
                    out,
                    Some(&taxonomy::felidae()),
                    Some(writer),
                    Some(enumerator),
                    Some(&settings),
                )
            }
            Scenario::Fluent => bookshelf_tree(settings).write(out, &bookshelf::bookshelf()),
            _ => write(out, Some(&taxonomy::felidae()), Some(&settings)),
        }
    }
}

impl FromStr for Scenario {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scenario::ALL
            .into_iter()
            .find(|scenario| scenario.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| anyhow::anyhow!("unknown scenario: {}", s))
    }
}

pub fn usage(program: &str) -> String {
    let mut output = format!("Usage: {} <option>\n\nWhere <option> is one of:\n\n", program);
    for scenario in Scenario::ALL {
        output.push_str(&format!(
            "{:.<14} {}\n",
            format!("{} ", scenario.name()),
            scenario.description()
        ));
    }
    output
}

fn category_color(category: TaxonomicRankCategory) -> ConsoleColor {
    match category {
        TaxonomicRankCategory::Family => ConsoleColor::Magenta,
        TaxonomicRankCategory::Subfamily => ConsoleColor::Blue,
        TaxonomicRankCategory::Genus => ConsoleColor::Red,
        TaxonomicRankCategory::Species => ConsoleColor::Cyan,
        TaxonomicRankCategory::Subspecies => ConsoleColor::Yellow,
    }
}

fn write_rank(rank: &TaxonomicRank, _level: usize, out: &mut dyn TreeOutput) -> Result<()> {
    let current = out.colors().unwrap_or_default();
    out.set_colors(Some(current.with_foreground(category_color(rank.category))))?;
    out.write_text(&format!("{}: ", rank.category))?;
    out.set_colors(Some(current.with_foreground(ConsoleColor::Green)))?;
    out.write_text(&rank.name)?;
    Ok(())
}

fn rank_members(rank: &TaxonomicRank, _level: usize) -> Result<Vec<&TaxonomicRank>> {
    Ok(rank.members.iter().collect())
}

/// Bookshelf tree: series ordered by name, books by publication year.
pub fn bookshelf_tree(settings: DisplaySettings) -> Tree {
    Tree::new(settings)
        .enum_nodes(|shelf: &Bookshelf, _| {
            let mut series: Vec<&BookSeries> = shelf.series.iter().collect();
            series.sort_by(|a, b| a.name.cmp(&b.name));
            Ok(series)
        })
        .write_node(|series: &BookSeries, _, out: &mut dyn TreeOutput| {
            out.write_text(&format!("{} by {}", series.name, series.author))?;
            Ok(())
        })
        .enum_nodes(|series: &BookSeries, _| {
            let mut books: Vec<&Book> = series.books.iter().collect();
            books.sort_by_key(|book| book.published);
            Ok(books)
        })
        .write_node(|book: &Book, _, out: &mut dyn TreeOutput| {
            out.write_text(&format!("{} ({})", book.title, book.published))?;
            Ok(())
        })
}
