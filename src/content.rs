//! Fixed copy for every screen.
//!
//! Nothing here is derived from state. Image entries are opaque paths: they
//! are shown as placeholders and never opened or checked.

/// Label of the affirmative button.
pub const ACCEPT_LABEL: &str = "Yes! 💕";

/// Labels the negative button walks through, one step per decline.
pub const DECLINE_PHRASES: [&str; 10] = [
    "Are you sure?",
    "Really sure?",
    "Think about it...",
    "Please? 🥺",
    "Give it a try!",
    "Don't be shy!",
    "It'll be special!",
    "I promise it'll be beautiful!",
    "Just one click!",
    "You know you want to! 💕",
];

pub const QUESTION: &str = "Will you be my Valentine?";
pub const SPARKLES: &str = "✦ ★ ✦";
pub const PARTICLE_GLYPH: &str = "♥";

pub const CELEBRATION_ICON: &str = "💖";
pub const CELEBRATION_TITLE: &str = "She Said Yes!";
pub const CELEBRATION_SUBTITLE: &str = "My beautiful Valentine ❤️";

pub const LETTER_BUTTON_LABEL: &str = "Read Your Letter 💝";
pub const LETTER_BUTTON_CAPTION: &str = "A special message just for you";

/// Seconds between the reveal of consecutive memory sections.
pub const SECTION_REVEAL_STAGGER_SECS: f64 = 0.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub images: &'static [&'static str],
}

pub const SECTIONS: [Section; 5] = [
    Section {
        icon: "♥",
        title: "When I first Saw You",
        description: "In that moment, time stood still and I knew my life would never be the same. \
            Your smile lit up my world and I knew I had found something truly special.",
        images: &["/20210104_165355.jpg", "/IMG-20211230-WA0150.jpg"],
    },
    Section {
        icon: "✦",
        title: "Every Moment Together",
        description: "Each day with you has been a blessing. From our laughter together to the \
            quiet moments, every second has been filled with joy and love beyond measure.",
        images: &["/IMG_8163.jpeg", "/IMG_1042.jpeg"],
    },
    Section {
        icon: "★",
        title: "Today",
        description: "This Valentine's Day, I want you to know that you are my everything. You \
            make my heart skip a beat and bring so much happiness into my life.",
        images: &[],
    },
    Section {
        icon: "♥",
        title: "Always & Forever",
        description: "I promise to love you, cherish you, and be there for you always. With you, \
            I've found my forever person. Together, we'll create countless beautiful memories.",
        images: &["/IMG_8650.jpeg"],
    },
    Section {
        icon: "✦",
        title: "One More Thing...",
        description: "There's something else I need to tell you. Something that comes from the \
            deepest part of my heart...",
        images: &[],
    },
];

pub const LETTER_INTRO: &str = "Five years of watching you, and this is what I've learned...";

/// Body of the letter. The last paragraph is rendered emphasised.
pub const LETTER_PARAGRAPHS: [&str; 6] = [
    "You're gorgeous, but that's honestly the least interesting thing about you. Yeah, you're \
     beautiful. Anyone with eyes can see that. You walk into a room, and people notice without \
     even trying. It's like your presence adjusts the whole atmosphere, like the energy shifts \
     just because you showed up. But the thing is, beauty is the easiest thing to see. It takes \
     zero effort to point out someone's face. What I see in you takes attention. That takes \
     knowing you, and that's the part that makes you unforgettable.",
    "I notice the way your eyes change when you talk about something you really care about. Not \
     just the sparkle but the focus, the passion, the way your whole voice lifts. It's like \
     watching a flame catch, even when you're trying to hide it. Maybe you don't realize it, but \
     that passion is one of the most beautiful things about you.",
    "I noticed your laugh, not the polite one you use when you're trying to be quiet but the real \
     one. The one that takes over your whole body, the one you try to cover because you're scared \
     it's too loud, too much. That laugh, it's the kind that makes people laugh by just hearing \
     it. It fills the room in a way nothing else does.",
    "And then there are the moments nobody else sees, the way you fall silent when you're \
     hurting, and the way you try to hold yourself together because you don't want to bother \
     anyone with your problems. You carry your pain like it's something you owe the world an \
     apology for, like you have to be strong all the time. And somehow, even in your quietest \
     moments, you still show up for people with your full heart. That strength is rare. The kind \
     of beauty you can't put makeup on, can't fake, and can't recreate, but the way you care \
     leaves marks on the people lucky enough to know you.",
    "Your beauty might turn heads, but your soul, the way you love, the way you give, and the way \
     you dream, that's what makes people stay; that's what makes you unforgettable. People think \
     they know you because they see your face, but if they paid attention, really paid \
     attention, they'd realize your looks are just the cover, not the story.",
    "You're gorgeous, yeah, but honestly, that's the least extraordinary thing about you. Your \
     real beauty exists in the parts of you the world never sees, unless they earn it, and \
     that's the part of you I never stop being in awe of.",
];

pub const LETTER_HEARTS: usize = 6;
pub const LETTER_SIGN_OFF: &str = "Forever Yours";
pub const LETTER_SIGNATURE: &str = "With All My Love ❤️";

pub fn letter_title(recipient: &str) -> String {
    format!("My Dearest {}", recipient)
}

pub fn footer_text(recipient: &str) -> String {
    format!("Made with love for {} 💕", recipient)
}
