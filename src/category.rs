use std::fmt;

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Drawing,
    Figure,
    Real,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Drawing, Category::Figure, Category::Real];

    // Catalog table index
    pub fn index(self) -> usize {
        match self {
            Category::Drawing => 0,
            Category::Figure => 1,
            Category::Real => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Drawing => "Drawings",
            Category::Figure => "Figures",
            Category::Real => "Real",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Drawing => "drawing",
            Category::Figure => "figure",
            Category::Real => "real",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
