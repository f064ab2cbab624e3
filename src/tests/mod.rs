#[cfg(test)]
mod rendering_tests {
    use std::fmt;

    use anyhow::{anyhow, Result};

    use crate::{
        to_string, write, write_with, write_with_enumerator, AlternatingConnectorPatterns,
        BufferOutput, ConsoleColor, ConsoleColors, DisplaySettings, NodeEnumerator, NodeWriter,
        TreeError, TreeNode, TreeOutput,
    };
    use std::sync::Arc;

    struct Item {
        name: &'static str,
        children: Vec<Item>,
    }

    fn item(name: &'static str, children: Vec<Item>) -> Item {
        Item { name, children }
    }

    fn leaf(name: &'static str) -> Item {
        item(name, vec![])
    }

    impl fmt::Display for Item {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.name)
        }
    }

    impl TreeNode for Item {
        fn nodes(&self) -> Vec<&dyn TreeNode> {
            self.children.iter().map(|c| c as &dyn TreeNode).collect()
        }
    }

    // A -> [B -> [D -> [F], E], C -> [G]]
    fn deep_tree() -> Item {
        item(
            "A",
            vec![
                item("B", vec![item("D", vec![leaf("F")]), leaf("E")]),
                item("C", vec![leaf("G")]),
            ],
        )
    }

    #[test]
    fn test_single_leaf_renders_one_line() -> Result<()> {
        let output = to_string(&leaf("X"), None)?;
        assert_eq!(output, "X\n");
        Ok(())
    }

    #[test]
    fn test_two_children_with_indent() -> Result<()> {
        let tree = item("A", vec![leaf("B"), leaf("C")]);
        let settings = DisplaySettings::new().with_indent_size(2);

        let output = to_string(&tree, Some(&settings))?;

        assert_eq!(output, "A\n├──B\n└──C\n");
        Ok(())
    }

    #[test]
    fn test_max_levels_one_renders_root_only() -> Result<()> {
        let tree = item("A", vec![leaf("B"), leaf("C")]);
        let settings = DisplaySettings::new().with_indent_size(2).with_max_levels(1);

        assert_eq!(to_string(&tree, Some(&settings))?, "A\n");
        Ok(())
    }

    #[test]
    fn test_zero_indent_three_levels() -> Result<()> {
        let tree = item("A", vec![item("B", vec![leaf("D")]), leaf("C")]);

        let output = to_string(&tree, None)?;

        assert_eq!(output, "A\n├B\n│└D\n└C\n");
        Ok(())
    }

    #[test]
    fn test_prefix_accumulates_vertical_and_blank_fragments() -> Result<()> {
        let settings = DisplaySettings::new().with_indent_size(1);

        let output = to_string(&deep_tree(), Some(&settings))?;

        let expected = [
            "A",
            "├─B",
            "│ ├─D",
            "│ │ └─F",
            "│ └─E",
            "└─C",
            "  └─G",
        ];
        assert_eq!(output.lines().collect::<Vec<_>>(), expected);
        Ok(())
    }

    #[test]
    fn test_depth_cap_stops_before_enumerating() -> Result<()> {
        let settings = DisplaySettings::new().with_indent_size(1).with_max_levels(2);
        let calls = std::cell::Cell::new(0);
        let enumerator: &NodeEnumerator<'_, Item> = &|node, _level| {
            calls.set(calls.get() + 1);
            Ok(node.children.iter().collect())
        };

        let mut out = BufferOutput::new();
        write_with_enumerator(&mut out, Some(&deep_tree()), Some(enumerator), Some(&settings))?;

        assert_eq!(out.as_str(), "A\n├─B\n└─C\n");
        // Only the root is asked for children
        assert_eq!(calls.get(), 1);
        Ok(())
    }

    #[test]
    fn test_last_child_gets_corner() -> Result<()> {
        let tree = item("root", (0..5).map(|_| leaf("n")).collect());
        let output = to_string(&tree, None)?;

        assert_eq!(output.matches('├').count(), 4);
        assert_eq!(output.matches('└').count(), 1);
        assert!(output.lines().last().unwrap().starts_with('└'));
        Ok(())
    }

    #[test]
    fn test_patterns_switch_per_level() -> Result<()> {
        let tree = item("A", vec![item("B", vec![leaf("D")]), leaf("C")]);
        let settings =
            DisplaySettings::new().with_connector_patterns(Arc::new(AlternatingConnectorPatterns));

        let output = to_string(&tree, Some(&settings))?;

        assert_eq!(output, "A\n├B\n│╚═D\n└C\n");
        Ok(())
    }

    #[test]
    fn test_custom_writer_receives_level() -> Result<()> {
        let writer: &NodeWriter<'_, Item> = &|node, level, out| {
            out.write_text(&format!("{}@{}", node.name, level))?;
            Ok(())
        };
        let enumerator: &NodeEnumerator<'_, Item> = &|node, _| Ok(node.children.iter().collect());

        let mut out = BufferOutput::new();
        write_with(&mut out, Some(&deep_tree()), Some(writer), Some(enumerator), None)?;

        assert_eq!(out.as_str().lines().nth(3), Some("││└F@3"));
        Ok(())
    }

    #[test]
    fn test_enumerator_can_reorder_children() -> Result<()> {
        let tree = item("A", vec![leaf("c"), leaf("a"), leaf("b")]);
        let enumerator: &NodeEnumerator<'_, Item> = &|node, _| {
            let mut children: Vec<&Item> = node.children.iter().collect();
            children.sort_by_key(|child| child.name);
            Ok(children)
        };

        let mut out = BufferOutput::new();
        write_with_enumerator(&mut out, Some(&tree), Some(enumerator), None)?;

        assert_eq!(out.as_str(), "A\n├a\n├b\n└c\n");
        Ok(())
    }

    #[test]
    fn test_missing_root_is_invalid_argument() {
        let mut out = BufferOutput::new();

        let err = write::<Item>(&mut out, None, None).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<TreeError>(),
            Some(TreeError::InvalidArgument { name: "root" })
        ));
        assert_eq!(out.as_str(), "");
    }

    #[test]
    fn test_missing_functions_are_invalid_arguments() {
        let tree = leaf("A");
        let writer: &NodeWriter<'_, Item> = &|_, _, _| Ok(());
        let enumerator: &NodeEnumerator<'_, Item> = &|node, _| Ok(node.children.iter().collect());
        let mut out = BufferOutput::new();

        let err = write_with(&mut out, Some(&tree), None, Some(enumerator), None).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TreeError>(),
            Some(TreeError::InvalidArgument { name: "writer" })
        ));

        let err = write_with(&mut out, Some(&tree), Some(writer), None, None).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TreeError>(),
            Some(TreeError::InvalidArgument { name: "enumerator" })
        ));

        let err = write_with_enumerator::<Item>(&mut out, Some(&tree), None, None).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TreeError>(),
            Some(TreeError::InvalidArgument { name: "enumerator" })
        ));

        assert_eq!(out.as_str(), "");
    }

    #[test]
    fn test_enumerator_error_propagates_and_keeps_partial_output() {
        let settings = DisplaySettings::new().with_indent_size(2);
        let enumerator: &NodeEnumerator<'_, Item> = &|node, _| {
            if node.name == "B" {
                return Err(anyhow!("cannot list B"));
            }
            Ok(node.children.iter().collect())
        };

        let mut out = BufferOutput::new();
        let err = write_with_enumerator(&mut out, Some(&deep_tree()), Some(enumerator), Some(&settings))
            .unwrap_err();

        assert_eq!(err.to_string(), "cannot list B");
        assert_eq!(out.as_str(), "A\n├──B\n");
    }

    #[test]
    fn test_node_and_connector_colors() -> Result<()> {
        let node_colors = ConsoleColors::new(ConsoleColor::Red, ConsoleColor::Yellow);
        let connector_colors = ConsoleColors::default().with_foreground(ConsoleColor::Cyan);
        let settings = DisplaySettings::new()
            .with_indent_size(2)
            .with_node_colors(node_colors)
            .with_connector_colors(connector_colors);
        let tree = item("A", vec![leaf("B"), leaf("C")]);

        let mut out = BufferOutput::new();
        write(&mut out, Some(&tree), Some(&settings))?;

        let segments: Vec<_> = out
            .segments()
            .iter()
            .map(|s| (s.colors, s.text.as_str()))
            .collect();
        assert_eq!(
            segments,
            vec![
                (Some(node_colors), "A\n"),
                (Some(connector_colors), "├──"),
                (Some(node_colors), "B\n"),
                (Some(connector_colors), "└──"),
                (Some(node_colors), "C\n"),
            ]
        );
        assert_eq!(out.colors(), None);
        Ok(())
    }

    #[test]
    fn test_colors_restored_after_writer_error() {
        let initial = ConsoleColors::new(ConsoleColor::White, ConsoleColor::DarkBlue);
        let settings = DisplaySettings::new()
            .with_node_colors(ConsoleColors::new(ConsoleColor::Red, ConsoleColor::Yellow))
            .with_connector_colors(ConsoleColors::default());
        let writer: &NodeWriter<'_, Item> = &|node, _, out| {
            out.set_colors(Some(ConsoleColors::default().with_foreground(ConsoleColor::Green)))?;
            if node.name == "D" {
                return Err(anyhow!("writer failed"));
            }
            out.write_text(node.name)?;
            Ok(())
        };
        let enumerator: &NodeEnumerator<'_, Item> = &|node, _| Ok(node.children.iter().collect());

        let mut out = BufferOutput::with_colors(Some(initial));
        let result = write_with(&mut out, Some(&deep_tree()), Some(writer), Some(enumerator), Some(&settings));

        assert!(result.is_err());
        assert_eq!(out.colors(), Some(initial));
    }

    #[test]
    fn test_colors_restored_after_success() -> Result<()> {
        let initial = ConsoleColors::new(ConsoleColor::White, ConsoleColor::DarkBlue);
        let settings = DisplaySettings::new()
            .with_node_colors(ConsoleColors::new(ConsoleColor::Red, ConsoleColor::Yellow));

        let mut out = BufferOutput::with_colors(Some(initial));
        write(&mut out, Some(&deep_tree()), Some(&settings))?;

        assert_eq!(out.colors(), Some(initial));
        // Connectors are written in whatever colors were active before
        assert!(out
            .segments()
            .iter()
            .filter(|s| s.text.contains('─') || s.text.contains('├') || s.text.contains('└'))
            .all(|s| s.colors == Some(initial)));
        Ok(())
    }
}

#[cfg(test)]
mod registry_tests {
    use std::fmt;
    use std::ops::Deref;

    use anyhow::Result;

    use crate::{DisplaySettings, Tree, TreeNode, TreeOutput};

    struct Shelf {
        series: Vec<Series>,
    }

    struct Series {
        name: &'static str,
        books: Vec<Book>,
    }

    struct Book {
        title: &'static str,
        year: u16,
    }

    impl fmt::Display for Shelf {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "Shelf")
        }
    }

    impl fmt::Display for Series {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "series {}", self.name)
        }
    }

    impl fmt::Display for Book {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "book {}", self.title)
        }
    }

    impl TreeNode for Shelf {}
    impl TreeNode for Series {}
    impl TreeNode for Book {}

    fn shelf() -> Shelf {
        Shelf {
            series: vec![
                Series {
                    name: "Z",
                    books: vec![Book { title: "z2", year: 2002 }, Book { title: "z1", year: 2001 }],
                },
                Series {
                    name: "M",
                    books: vec![Book { title: "m1", year: 1990 }],
                },
            ],
        }
    }

    fn shelf_tree() -> Tree {
        Tree::new(DisplaySettings::new().with_indent_size(1))
            .enum_nodes(|shelf: &Shelf, _| {
                let mut series: Vec<&Series> = shelf.series.iter().collect();
                series.sort_by_key(|s| s.name);
                Ok(series)
            })
            .write_node(|series: &Series, _, out: &mut dyn TreeOutput| {
                out.write_text(&format!("[{}]", series.name))?;
                Ok(())
            })
            .enum_nodes(|series: &Series, _| {
                let mut books: Vec<&Book> = series.books.iter().collect();
                books.sort_by_key(|b| b.year);
                Ok(books)
            })
            .write_node(|book: &Book, level, out: &mut dyn TreeOutput| {
                out.write_text(&format!("{} ({}) L{}", book.title, book.year, level))?;
                Ok(())
            })
    }

    #[test]
    fn test_mixed_types_use_their_own_handlers() -> Result<()> {
        let output = shelf_tree().write_to_string(&shelf())?;

        let expected = [
            "Shelf",
            "├─[M]",
            "│ └─m1 (1990) L2",
            "└─[Z]",
            "  ├─z1 (2001) L2",
            "  └─z2 (2002) L2",
        ];
        assert_eq!(output.lines().collect::<Vec<_>>(), expected);
        Ok(())
    }

    #[test]
    fn test_type_without_handlers_falls_back_to_display_and_leaf() -> Result<()> {
        let tree = Tree::new(DisplaySettings::new());
        // Shelf has no enumerator and keeps the default empty `nodes`
        assert_eq!(tree.write_to_string(&shelf())?, "Shelf\n");
        Ok(())
    }

    #[test]
    fn test_last_registration_wins() -> Result<()> {
        let tree = Tree::new(DisplaySettings::new())
            .write_node(|_: &Book, _, out: &mut dyn TreeOutput| {
                out.write_text("first")?;
                Ok(())
            })
            .write_node(|_: &Book, _, out: &mut dyn TreeOutput| {
                out.write_text("second")?;
                Ok(())
            });

        assert_eq!(tree.write_to_string(&Book { title: "t", year: 1 })?, "second\n");
        Ok(())
    }

    struct Base {
        name: &'static str,
        children: Vec<Derived>,
    }

    struct Derived {
        base: Base,
    }

    impl Deref for Derived {
        type Target = Base;

        fn deref(&self) -> &Base {
            &self.base
        }
    }

    impl fmt::Display for Base {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "base {}", self.name)
        }
    }

    impl fmt::Display for Derived {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "derived {}", self.name)
        }
    }

    impl TreeNode for Base {
        fn nodes(&self) -> Vec<&dyn TreeNode> {
            self.children.iter().map(|c| c as &dyn TreeNode).collect()
        }
    }

    impl TreeNode for Derived {}

    #[test]
    fn test_dispatch_is_by_exact_type() -> Result<()> {
        let root = Base {
            name: "root",
            children: vec![Derived {
                base: Base { name: "child", children: vec![] },
            }],
        };
        let tree = Tree::new(DisplaySettings::new()).write_node(
            |base: &Base, _, out: &mut dyn TreeOutput| {
                out.write_text(&format!("custom {}", base.name))?;
                Ok(())
            },
        );

        let output = tree.write_to_string(&root)?;

        assert_eq!(output, "custom root\n└derived child\n");
        Ok(())
    }

    #[test]
    fn test_registry_respects_depth_limit() -> Result<()> {
        let tree = Tree::new(DisplaySettings::new().with_max_levels(2))
            .enum_nodes(|shelf: &Shelf, _| Ok(shelf.series.iter().collect::<Vec<&Series>>()))
            .enum_nodes(|series: &Series, _| Ok(series.books.iter().collect::<Vec<&Book>>()));

        let output = tree.write_to_string(&shelf())?;

        assert_eq!(output, "Shelf\n├series Z\n└series M\n");
        Ok(())
    }
}

#[cfg(test)]
mod output_failure_tests {
    use std::fmt;
    use std::io;

    use crate::renderer::traits::MockTreeOutput;
    use crate::{write, ConsoleColors, TreeError, TreeNode};

    struct Leaf;

    impl fmt::Display for Leaf {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "leaf")
        }
    }

    impl TreeNode for Leaf {}

    #[test]
    fn test_sink_failure_surfaces_as_output_error() {
        let mut out = MockTreeOutput::new();
        out.expect_colors().return_const(None::<ConsoleColors>);
        out.expect_set_colors().never();
        out.expect_write_line_break().never();
        out.expect_write_text()
            .times(1)
            .returning(|_| Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed")));

        let err = write(&mut out, Some(&Leaf), None).unwrap_err();

        match err.downcast_ref::<TreeError>() {
            Some(TreeError::Output(source)) => assert_eq!(source.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
