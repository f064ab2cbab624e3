use std::fmt;

use console_tree::TreeNode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaxonomicRankCategory {
    Family,
    Subfamily,
    Genus,
    Species,
    Subspecies,
}

impl fmt::Display for TaxonomicRankCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug, Clone)]
pub struct TaxonomicRank {
    pub category: TaxonomicRankCategory,
    pub name: String,
    pub members: Vec<TaxonomicRank>,
}

impl TaxonomicRank {
    fn new(category: TaxonomicRankCategory, name: &str, members: Vec<TaxonomicRank>) -> Self {
        Self {
            category,
            name: name.to_string(),
            members,
        }
    }

    fn genus(name: &str, species: &[&str]) -> Self {
        Self::new(
            TaxonomicRankCategory::Genus,
            name,
            species.iter().map(|name| Self::species(name)).collect(),
        )
    }

    fn species(name: &str) -> Self {
        Self::new(TaxonomicRankCategory::Species, name, Vec::new())
    }
}

impl fmt::Display for TaxonomicRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.name)
    }
}

impl TreeNode for TaxonomicRank {
    fn nodes(&self) -> Vec<&dyn TreeNode> {
        self.members.iter().map(|m| m as &dyn TreeNode).collect()
    }
}

/// The cat family, down to a single subspecies.
pub fn felidae() -> TaxonomicRank {
    use TaxonomicRankCategory::*;

    let mut felis = TaxonomicRank::genus(
        "Felis",
        &[
            "Felis bieti",
            "Felis chaus",
            "Felis margarita",
            "Felis manul",
            "Felis nigripes",
            "Felis silvestris",
        ],
    );
    if let Some(silvestris) = felis.members.last_mut() {
        silvestris.members.push(TaxonomicRank::new(
            Subspecies,
            "Felis silvestris catus",
            Vec::new(),
        ));
    }

    let felinae = TaxonomicRank::new(
        Subfamily,
        "Felinae",
        vec![
            TaxonomicRank::genus("Acinonyx", &["Acinonyx jubatus"]),
            TaxonomicRank::genus("Caracal", &["Caracal aurata", "Caracal caracal"]),
            TaxonomicRank::genus("Catopuma", &["Catopuma badia", "Catopuma temminckii"]),
            felis,
            TaxonomicRank::genus("Herpailurus", &["Herpailurus yagouaroundi"]),
            TaxonomicRank::genus(
                "Leopardus",
                &[
                    "Leopardus colocolo",
                    "Leopardus geoffroyi",
                    "Leopardus guigna",
                    "Leopardus jacobitus",
                    "Leopardus pajeros",
                    "Leopardus pardalis",
                    "Leopardus tigrinus",
                    "Leopardus wiedii",
                ],
            ),
            TaxonomicRank::genus("Leptailurus", &["Leptailurus serval"]),
            TaxonomicRank::genus(
                "Lynx",
                &["Lynx lynx", "Lynx pardinus", "Lynx rufus", "Lynx canadensis"],
            ),
            TaxonomicRank::genus("Pardofelis", &["Pardofelis marmorata"]),
            TaxonomicRank::genus(
                "Prionailurus",
                &[
                    "Prionailurus bengalensis",
                    "Prionailurus iriomotensis",
                    "Prionailurus planiceps",
                    "Prionailurus rubiginosus",
                    "Prionailurus viverrinus",
                ],
            ),
            TaxonomicRank::genus("Puma", &["Puma concolor"]),
        ],
    );

    let pantherinae = TaxonomicRank::new(
        Subfamily,
        "Pantherinae",
        vec![
            TaxonomicRank::genus("Neofelis", &["Neofelis diardi", "Neofelis nebulosa"]),
            TaxonomicRank::genus(
                "Panthera",
                &[
                    "Panthera leo",
                    "Panthera onca",
                    "Panthera pardus",
                    "Panthera tigris",
                    "Panthera uncia",
                ],
            ),
        ],
    );

    TaxonomicRank::new(Family, "Felidae", vec![felinae, pantherinae])
}
