pub const AUTHOR: &str = "Bovonto Bot";

pub const PITCHES: &[&str] = &[
    "Thirsty, comrade? Bovonto. The grape soda of the revolution.",
    "Bovonto: brewed since 1916, because the classics never needed a rebrand.",
    "Nobody has ever regretted a cold Bovonto. Nobody has ever asked, either.",
    "Feeling flat? Bovonto is never flat. Unless you leave the cap off.",
    "Bovonto pairs with everything. Samosas. Biryani. Overthrowing the bourgeoisie.",
    "Ask your doctor if Bovonto is right for you. Your doctor already has one.",
    "Bovonto: it's purple, it's fizzy, it's here.",
    "Real grapes were consulted in the making of this beverage.",
];
