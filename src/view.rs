//! Declarative page view
//!
//! `render` maps profile state to plain nodes per page region. Nothing here
//! touches the DOM; `platform::dom` mounts the result.

use crate::menu::{MenuEntry, companions_menu};
use crate::profile::{Creature, PrimaryPerson, ProfileState};

/// Fixed page regions, by element id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    FirstRow,
    LeftCol,
    RightCol,
    LastRow,
}

impl Region {
    pub const ALL: [Region; 4] = [
        Region::FirstRow,
        Region::LeftCol,
        Region::RightCol,
        Region::LastRow,
    ];

    pub fn element_id(&self) -> &'static str {
        match self {
            Region::FirstRow => "firstRow",
            Region::LeftCol => "leftCol",
            Region::RightCol => "rightCol",
            Region::LastRow => "lastRow",
        }
    }
}

/// An element to create: tag, class, optional text/image source, children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub tag: &'static str,
    pub class: &'static str,
    pub text: Option<String>,
    pub src: Option<String>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(tag: &'static str, class: &'static str) -> Self {
        Self {
            tag,
            class,
            text: None,
            src: None,
            children: Vec::new(),
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn src(mut self, src: impl Into<String>) -> Self {
        self.src = Some(src.into());
        self
    }

    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Depth-first search by class
    pub fn find(&self, class: &str) -> Option<&Node> {
        if self.class == class {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(class))
    }
}

/// Everything the page shows for one profile
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileView {
    pub first_row: Vec<Node>,
    pub left_col: Vec<Node>,
    pub right_col: Vec<Node>,
    pub last_row: Vec<Node>,
    pub companions: Vec<MenuEntry>,
}

impl ProfileView {
    pub fn region(&self, region: Region) -> &[Node] {
        match region {
            Region::FirstRow => &self.first_row,
            Region::LeftCol => &self.left_col,
            Region::RightCol => &self.right_col,
            Region::LastRow => &self.last_row,
        }
    }

    /// Find the first node with `class` in any region
    pub fn find(&self, class: &str) -> Option<&Node> {
        Region::ALL
            .iter()
            .flat_map(|r| self.region(*r))
            .find_map(|n| n.find(class))
    }
}

/// Render the whole page. Absent fields leave their region empty.
pub fn render(state: &ProfileState) -> ProfileView {
    ProfileView {
        first_row: state.primary.as_ref().map(render_profile).unwrap_or_default(),
        left_col: state.quote.as_deref().map(render_quote).unwrap_or_default(),
        right_col: state
            .favorite_creature
            .as_ref()
            .map(render_creature)
            .unwrap_or_default(),
        last_row: state.about.as_deref().map(render_about).unwrap_or_default(),
        companions: companions_menu(&state.companions),
    }
}

fn render_profile(person: &PrimaryPerson) -> Vec<Node> {
    let image = Node::new("div", "border-image").child(
        Node::new("div", "shape-profile")
            .child(Node::new("img", "profile-picture").src(&person.picture)),
    );
    vec![
        image,
        Node::new("h1", "profile-name").text(person.full_name()),
        Node::new("h3", "profile-location").text(person.location()),
    ]
}

fn render_quote(quote: &str) -> Vec<Node> {
    vec![
        Node::new("h5", "quoto-header").text("Favorite Quote:"),
        Node::new("p", "quoto").text(format!("“ {} ”", quote)),
    ]
}

fn render_creature(creature: &Creature) -> Vec<Node> {
    vec![
        Node::new("h5", "pokemon-header").text("Favorite Pokemon:"),
        Node::new("div", "pokemon-div")
            .child(Node::new("p", "pokemon-name").text(format!("{}:", creature.name)))
            .child(Node::new("img", "pokemon-image").src(&creature.photo)),
    ]
}

fn render_about(about: &str) -> Vec<Node> {
    vec![
        Node::new("h4", "about-header").text("About"),
        Node::new("p", "about-text").text(about),
    ]
}
