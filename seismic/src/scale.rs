use crate::Color;

/// One step of the Modified Mercalli Intensity scale: how shaking of this strength is actually
/// experienced. Static reference data, shown in legends and popups.
pub struct MmiScaleEntry {
    pub level: u8,
    pub name: &'static str,
    pub description: &'static str,
    /// The conventional ShakeMap-style color, as "#RRGGBB".
    pub color: &'static str,
}

impl MmiScaleEntry {
    pub fn fill(&self) -> Color {
        Color::hex(self.color)
    }
}

/// The full 10-level scale, weakest first.
pub const MMI_SCALE: [MmiScaleEntry; 10] = [
    MmiScaleEntry {
        level: 1,
        name: "I. Not felt",
        description: "Not felt except by a very few under especially favorable conditions.",
        color: "#FFFFFF",
    },
    MmiScaleEntry {
        level: 2,
        name: "II. Weak",
        description: "Felt only by a few persons at rest, especially on upper floors of buildings.",
        color: "#ACD8E9",
    },
    MmiScaleEntry {
        level: 3,
        name: "III. Weak",
        description:
            "Felt quite noticeably by persons indoors, especially on upper floors of buildings.",
        color: "#ACD8E9",
    },
    MmiScaleEntry {
        level: 4,
        name: "IV. Light",
        description: "Felt indoors by many, outdoors by few during the day. Dishes, windows, \
                      doors disturbed.",
        color: "#83D0DA",
    },
    MmiScaleEntry {
        level: 5,
        name: "V. Moderate",
        description: "Felt by nearly everyone; many awakened. Some dishes, windows broken.",
        color: "#7BC87F",
    },
    MmiScaleEntry {
        level: 6,
        name: "VI. Strong",
        description: "Felt by all, many frightened. Some heavy furniture moved; a few instances \
                      of fallen plaster.",
        color: "#F9F518",
    },
    MmiScaleEntry {
        level: 7,
        name: "VII. Very Strong",
        description: "Damage negligible in buildings of good design and construction; slight to \
                      moderate in well-built ordinary structures.",
        color: "#FAC611",
    },
    MmiScaleEntry {
        level: 8,
        name: "VIII. Severe",
        description: "Damage slight in specially designed structures; considerable damage in \
                      ordinary substantial buildings.",
        color: "#FA8A11",
    },
    MmiScaleEntry {
        level: 9,
        name: "IX. Violent",
        description: "Damage considerable in specially designed structures. Buildings shifted \
                      off foundations.",
        color: "#F7100C",
    },
    MmiScaleEntry {
        level: 10,
        name: "X. Extreme",
        description: "Some well-built wooden structures destroyed; most masonry and frame \
                      structures destroyed.",
        color: "#C80F0A",
    },
];

/// Looks up a level in [1, 10]. Panics on anything else.
pub fn entry(level: u8) -> &'static MmiScaleEntry {
    if !(1..=10).contains(&level) {
        panic!("Bad MMI level {}", level);
    }
    &MMI_SCALE[(level as usize) - 1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_match_positions() {
        for (idx, e) in MMI_SCALE.iter().enumerate() {
            assert_eq!(e.level as usize, idx + 1);
            assert_eq!(entry(e.level).name, e.name);
        }
    }

    #[test]
    #[should_panic]
    fn bad_level() {
        entry(11);
    }
}
