pub const AUTHOR: &str = "Bob Ross";

pub const QUOTES: &[&str] = &[
    "We don't make mistakes, just happy little accidents.",
    "Talent is a pursued interest. Anything that you're willing to practice, you can do.",
    "There's nothing wrong with having a tree as a friend.",
    "Let's get crazy.",
    "You too can paint almighty pictures.",
    "In painting, you have unlimited power. You have the ability to move mountains.",
    "Everybody needs a friend.",
    "Just go out and talk to a tree. Make friends with it.",
    "All you need to paint is a few tools, a little instruction, and a vision in your mind.",
    "This is your world. You're the creator.",
    "Let's build a happy little cloud.",
    "Didn't you know you had that much power? You can move mountains. You can do anything.",
    "You need the dark in order to show the light.",
    "Beat the devil out of it.",
];
