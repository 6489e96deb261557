use super::Quote;

/// `(text, author, category)` rows loaded by [`super::Catalog::builtin`].
const QUOTES: &[(&str, &str, &str)] = &[
    ("The only way to do great work is to love what you do.", "Steve Jobs", "motivation"),
    ("Innovation distinguishes between a leader and a follower.", "Steve Jobs", "success"),
    ("Life is what happens when you're busy making other plans.", "John Lennon", "life"),
    (
        "The future belongs to those who believe in the beauty of their dreams.",
        "Eleanor Roosevelt",
        "courage",
    ),
    (
        "It is during our darkest moments that we must focus to see the light.",
        "Aristotle",
        "wisdom",
    ),
    ("The only impossible journey is the one you never begin.", "Tony Robbins", "motivation"),
    (
        "Success is not final, failure is not fatal: it is the courage to continue that counts.",
        "Winston Churchill",
        "success",
    ),
    ("Believe you can and you're halfway there.", "Theodore Roosevelt", "motivation"),
    (
        "The best time to plant a tree was 20 years ago. The second best time is now.",
        "Chinese Proverb",
        "wisdom",
    ),
    ("Don't let yesterday take up too much of today.", "Will Rogers", "life"),
    ("You learn more from failure than from success.", "Unknown", "success"),
    (
        "It's not whether you get knocked down, it's whether you get up.",
        "Vince Lombardi",
        "courage",
    ),
    ("The way to get started is to quit talking and begin doing.", "Walt Disney", "motivation"),
    ("Don't watch the clock; do what it does. Keep going.", "Sam Levenson", "success"),
    (
        "The only limit to our realization of tomorrow is our doubts of today.",
        "Franklin D. Roosevelt",
        "courage",
    ),
    ("Everything you want is on the other side of fear.", "George Addair", "courage"),
    (
        "Believe in yourself. You are braver than you think, more talented than you know, and capable of more than you imagine.",
        "Roy T. Bennett",
        "motivation",
    ),
    (
        "I learned that courage was not the absence of fear, but the triumph over it.",
        "Nelson Mandela",
        "courage",
    ),
    ("The only thing we have to fear is fear itself.", "Franklin D. Roosevelt", "wisdom"),
    (
        "Success usually comes to those who are too busy to be looking for it.",
        "Henry David Thoreau",
        "success",
    ),
];

pub(super) fn quotes() -> Vec<Quote> {
    QUOTES
        .iter()
        .map(|(text, author, category)| Quote::new(*text, *author, *category))
        .collect()
}
