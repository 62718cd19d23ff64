// Static content panels switched by the navigation bar.

pub struct Section {
    pub key: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const SECTIONS: [Section; 4] = [
    Section {
        key: "home",
        title: "Welcome to the show",
        body: "Create beautiful dynamic motion graphics for webpage backgrounds.",
    },
    Section {
        key: "about",
        title: "About Procedural Animation",
        body: "This demo showcases Rust and WebGPU creating immersive, interactive backgrounds. The colorful cubes are procedurally generated with various movement patterns and transitions.",
    },
    Section {
        key: "gallery",
        title: "Animation Gallery",
        body: "Browse our collection of procedural animations and interactive visuals. Each animation features unique algorithms and color palettes designed to enhance user experience.",
    },
    Section {
        key: "contact",
        title: "Get In Touch",
        body: "Interested in implementing beautiful motion graphics for your website? Contact us to discuss how we can bring your digital presence to life with custom animations.",
    },
];

pub const DEFAULT_SECTION: &str = "home";

/// Element id of the panel for `key`.
#[inline]
pub fn section_element_id(key: &str) -> String {
    format!("{key}-section")
}

/// Map a nav link's visible text onto a section key, if one matches.
pub fn section_key_for_link(text: &str) -> Option<&'static str> {
    let wanted = text.trim().to_lowercase();
    SECTIONS.iter().map(|s| s.key).find(|k| *k == wanted)
}
