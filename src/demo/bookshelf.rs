use std::fmt;

use console_tree::TreeNode;

#[derive(Debug, Clone)]
pub struct Book {
    pub title: String,
    pub published: u16,
}

#[derive(Debug, Clone)]
pub struct BookSeries {
    pub name: String,
    pub author: String,
    pub books: Vec<Book>,
}

#[derive(Debug, Clone, Default)]
pub struct Bookshelf {
    pub series: Vec<BookSeries>,
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

impl fmt::Display for BookSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Display for Bookshelf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bookshelf")
    }
}

// Children are listed through the enumerators registered on the tree
impl TreeNode for Book {}
impl TreeNode for BookSeries {}
impl TreeNode for Bookshelf {}

fn series(name: &str, author: &str, books: &[(&str, u16)]) -> BookSeries {
    BookSeries {
        name: name.to_string(),
        author: author.to_string(),
        books: books
            .iter()
            .map(|(title, published)| Book {
                title: title.to_string(),
                published: *published,
            })
            .collect(),
    }
}

pub fn bookshelf() -> Bookshelf {
    Bookshelf {
        series: vec![
            series(
                "The Hitchhiker's Guide to the Galaxy",
                "Douglas Adams",
                &[
                    ("Life, the Universe and Everything", 1982),
                    ("Mostly Harmless", 1992),
                    ("So Long, and Thanks for All the Fish", 1984),
                    ("The Hitchhiker's Guide to the Galaxy", 1979),
                    ("The Restaurant at the End of the Universe", 1980),
                ],
            ),
            series(
                "Dune",
                "Frank Herbert",
                &[
                    ("Chapterhouse: Dune", 1985),
                    ("Children of Dune", 1976),
                    ("Dune", 1965),
                    ("Dune Messiah", 1969),
                    ("God Emperor of Dune", 1981),
                    ("Heretics of Dune", 1984),
                ],
            ),
            series(
                "The Lord of the Rings",
                "J. R. R. Tolkien",
                &[
                    ("The Fellowship of the Ring", 1954),
                    ("The Return of the King", 1955),
                    ("The Two Towers", 1954),
                ],
            ),
        ],
    }
}
