//! Static venue copy rendered by the page.

#[derive(Clone, Copy)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { href: "#rules", label: "Rules & Tips" },
    NavLink { href: "#scoreboard", label: "Scoreboard" },
    NavLink { href: "#gallery", label: "Gallery" },
    NavLink { href: "#testimonials", label: "Reviews" },
    NavLink { href: "#booking", label: "Book a Table" },
];

#[derive(Clone, Copy)]
pub struct AccordionItem {
    pub id: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const HOUSE_RULES: &[AccordionItem] = &[
    AccordionItem {
        id: "break",
        title: "The break",
        body: "Rack tight, break from behind the head string, and at least four balls must reach a rail or one ball must be pocketed.",
    },
    AccordionItem {
        id: "fouls",
        title: "Fouls and ball in hand",
        body: "Scratching, missing the object ball, or failing to reach a rail after contact gives your opponent ball in hand anywhere on the table.",
    },
    AccordionItem {
        id: "eight",
        title: "Sinking the eight",
        body: "Call the pocket. Sinking the eight early or in an uncalled pocket loses the rack.",
    },
    AccordionItem {
        id: "etiquette",
        title: "Table etiquette",
        body: "One player at the table at a time, no drinks on the rails, and chalk goes back in the tray.",
    },
];

#[derive(Clone, Copy)]
pub enum TabBody {
    Rules(&'static [AccordionItem]),
    Tips(&'static [&'static str]),
}

#[derive(Clone, Copy)]
pub struct RuleTab {
    pub id: &'static str,
    pub label: &'static str,
    pub body: TabBody,
}

pub const RULE_TABS: &[RuleTab] = &[
    RuleTab { id: "house-rules", label: "House Rules", body: TabBody::Rules(HOUSE_RULES) },
    RuleTab {
        id: "beginner-tips",
        label: "Beginner Tips",
        body: TabBody::Tips(&[
            "Keep a bridge hand that is firm and flat; a wobbly bridge costs more shots than bad aim.",
            "Follow through straight, and let the cue do the work instead of your shoulder.",
            "Aim at the ghost ball, not the object ball.",
        ]),
    },
    RuleTab {
        id: "league-nights",
        label: "League Nights",
        body: TabBody::Tips(&[
            "Tuesday eight-ball and Thursday nine-ball leagues start at 7pm.",
            "Teams of four, handicapped, all skill levels welcome.",
        ]),
    },
];

/// Options of the player selector beside the scoreboard.
pub const PLAYER_LABELS: [&str; 2] = ["Solids vs Stripes", "Stripes vs Solids"];

#[derive(Clone, Copy)]
pub struct GalleryImage {
    pub full: &'static str,
    pub thumb: &'static str,
    pub alt: &'static str,
}

pub const GALLERY: &[GalleryImage] = &[
    GalleryImage { full: "/img/tables.jpg", thumb: "/img/tables-thumb.jpg", alt: "Row of nine-foot tables under pendant lights" },
    GalleryImage { full: "/img/rack.jpg", thumb: "/img/rack-thumb.jpg", alt: "Fresh rack on green felt" },
    GalleryImage { full: "/img/bar.jpg", thumb: "/img/bar-thumb.jpg", alt: "Bar counter with draft taps" },
    GalleryImage { full: "/img/lounge.jpg", thumb: "/img/lounge-thumb.jpg", alt: "" },
];

#[derive(Clone, Copy)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial { quote: "Best-kept tables in town. The felt is always fresh.", author: "Marcus, league captain" },
    Testimonial { quote: "Friendly staff who will happily teach you a bank shot.", author: "Priya, Thursday regular" },
    Testimonial { quote: "Booked a table for a birthday and it was perfect.", author: "Dana, first-timer" },
];
