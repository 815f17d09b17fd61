use phf::phf_map;

use crate::color_image_mask::Rgb;

static BUILTIN_TINTS: phf::Map<&'static str, Rgb> = phf_map! {
    "blue" => (61, 75, 154),
    "red" => (193, 58, 58),
};

/// Order in which the outputs are produced
const TINT_ORDER: [&str; 2] = ["blue", "red"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tint {
    pub name: &'static str,
    pub color: Rgb,
}

impl Tint {
    pub fn builtin(name: &str) -> Option<Self> {
        BUILTIN_TINTS
            .get_entry(name)
            .map(|(&name, &color)| Self { name, color })
    }
}

pub fn default_tints() -> Vec<Tint> {
    TINT_ORDER
        .iter()
        .filter_map(|name| Tint::builtin(name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_blue_then_red() {
        assert_eq!(
            default_tints(),
            vec![
                Tint { name: "blue", color: (61, 75, 154) },
                Tint { name: "red", color: (193, 58, 58) },
            ]
        );
    }

    #[test]
    fn every_builtin_is_in_the_output_order() {
        assert_eq!(default_tints().len(), BUILTIN_TINTS.len());
        assert!(Tint::builtin("green").is_none());
    }

    #[test]
    fn tint_names_are_safe_file_name_parts() {
        let names: Vec<_> = default_tints().iter().map(|t| t.name).collect();
        for name in &names {
            assert!(!name.is_empty());
            assert!(name.bytes().all(|b| b.is_ascii_lowercase()));
        }
        let mut unique = names.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), names.len());
    }
}
