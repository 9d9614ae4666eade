//! The built-in master pools: fifteen items per exercise pool and three
//! reading stories, all practicing the -able/-ible suffix family.

use crate::model::{
    AntonymItem, AntonymItemError, ItemId, ReadingError, ReadingQuestion, SentenceItem,
    SentenceItemError, Story, StoryId, SyllableItem, SyllableItemError, WordBuilderItem,
    WordBuilderItemError, YesNoItem, YesNoItemError,
};

use super::{ContentError, ContentLibrary};

pub(super) fn library() -> Result<ContentLibrary, ContentError> {
    ContentLibrary::new(
        syllables()?,
        word_builder()?,
        sentences()?,
        antonyms()?,
        yes_no()?,
        stories()?,
    )
}

fn owned(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|part| (*part).to_owned()).collect()
}

//
// ─── SYLLABLES ─────────────────────────────────────────────────────────────────
//

fn syllable(id: u32, word: &str, parts: &[&str]) -> Result<SyllableItem, SyllableItemError> {
    SyllableItem::new(ItemId::new(id), word, owned(parts))
}

fn syllables() -> Result<Vec<SyllableItem>, SyllableItemError> {
    Ok(vec![
        syllable(1, "presentable", &["pre", "sent", "able"])?,
        syllable(2, "miserable", &["mis", "er", "able"])?,
        syllable(3, "valuable", &["val", "u", "able"])?,
        syllable(4, "impossible", &["im", "poss", "ible"])?,
        syllable(5, "dependable", &["de", "pend", "able"])?,
        syllable(6, "reversible", &["re", "vers", "ible"])?,
        syllable(7, "favorable", &["fa", "vor", "able"])?,
        syllable(8, "comfortable", &["com", "fort", "able"])?,
        syllable(9, "incredible", &["in", "cred", "ible"])?,
        syllable(10, "visible", &["vis", "ible"])?,
        syllable(11, "flexible", &["flex", "ible"])?,
        syllable(12, "edible", &["ed", "ible"])?,
        syllable(13, "adorable", &["a", "dor", "able"])?,
        syllable(14, "responsible", &["re", "spons", "ible"])?,
        syllable(15, "breakable", &["break", "able"])?,
    ])
}

//
// ─── WORD BUILDER ──────────────────────────────────────────────────────────────
//

fn builder(
    id: u32,
    parts: &[&str],
    meaning: &str,
    target: &str,
) -> Result<WordBuilderItem, WordBuilderItemError> {
    WordBuilderItem::new(ItemId::new(id), owned(parts), meaning, target)
}

fn word_builder() -> Result<Vec<WordBuilderItem>, WordBuilderItemError> {
    Ok(vec![
        builder(1, &["val", "u", "able"], "worth a lot", "valuable")?,
        builder(2, &["re", "li", "able"], "dependable", "reliable")?,
        builder(
            3,
            &["in", "cred", "ible"],
            "fantastic / hard to believe",
            "incredible",
        )?,
        builder(4, &["in", "vis", "ible"], "not able to be seen", "invisible")?,
        builder(
            5,
            &["re", "vers", "ible"],
            "able to be turned inside out",
            "reversible",
        )?,
        builder(
            6,
            &["re", "mark", "able"],
            "astonishing / worthy of attention",
            "remarkable",
        )?,
        builder(7, &["div", "is", "ible"], "able to be divided", "divisible")?,
        builder(8, &["com", "fort", "able"], "cozy and relaxed", "comfortable")?,
        builder(9, &["flex", "ible"], "able to bend easily", "flexible")?,
        builder(10, &["sens", "ible"], "smart and practical", "sensible")?,
        builder(11, &["horr", "ible"], "very unpleasant", "horrible")?,
        builder(12, &["a", "dor", "able"], "very cute", "adorable")?,
        builder(13, &["vis", "ible"], "able to be seen", "visible")?,
        builder(14, &["ed", "ible"], "safe to eat", "edible")?,
        builder(15, &["us", "able"], "fit to be used", "usable")?,
    ])
}

//
// ─── SENTENCES ─────────────────────────────────────────────────────────────────
//

fn sentence(
    id: u32,
    prefix: &str,
    suffix: &str,
    options: [&str; 2],
    correct: &str,
) -> Result<SentenceItem, SentenceItemError> {
    SentenceItem::new(
        ItemId::new(id),
        prefix,
        suffix,
        [options[0].to_owned(), options[1].to_owned()],
        correct,
    )
}

fn sentences() -> Result<Vec<SentenceItem>, SentenceItemError> {
    Ok(vec![
        sentence(
            1,
            "My grandmother's gold ring cost a lot. It is very",
            ".",
            ["valueless", "valuable"],
            "valuable",
        )?,
        sentence(
            2,
            "The sunny weather was",
            "for our picnic.",
            ["favored", "favorable"],
            "favorable",
        )?,
        sentence(
            3,
            "Dry wood is highly",
            ", so keep it away from fire.",
            ["combust", "combustible"],
            "combustible",
        )?,
        sentence(
            4,
            "My old car starts every morning. It is very",
            ".",
            ["depend", "dependable"],
            "dependable",
        )?,
        sentence(
            5,
            "Please tuck in your shirt so you look",
            ".",
            ["presented", "presentable"],
            "presentable",
        )?,
        sentence(
            6,
            "The number ten is evenly",
            "by two.",
            ["divide", "divisible"],
            "divisible",
        )?,
        sentence(
            7,
            "Don't worry! This marker is",
            "and comes off.",
            ["wash", "washable"],
            "washable",
        )?,
        sentence(
            8,
            "The gymnast was very",
            "and could do the splits.",
            ["rigid", "flexible"],
            "flexible",
        )?,
        sentence(
            9,
            "That mushroom is poisonous, it is not",
            ".",
            ["eaten", "edible"],
            "edible",
        )?,
        sentence(
            10,
            "The stars are not",
            "during the day.",
            ["vision", "visible"],
            "visible",
        )?,
        sentence(
            11,
            "The puppy was so",
            "that everyone wanted to pet it.",
            ["adore", "adorable"],
            "adorable",
        )?,
        sentence(
            12,
            "It is",
            "for a human to fly without a plane.",
            ["possible", "impossible"],
            "impossible",
        )?,
        sentence(
            13,
            "A good raincoat is",
            "so you can wear it two ways.",
            ["reverse", "reversible"],
            "reversible",
        )?,
        sentence(
            14,
            "The loud music was barely",
            "through the thick walls.",
            ["audio", "audible"],
            "audible",
        )?,
        sentence(
            15,
            "It was a",
            "movie; I hid my eyes the whole time!",
            ["horror", "horrible"],
            "horrible",
        )?,
    ])
}

//
// ─── ANTONYMS ──────────────────────────────────────────────────────────────────
//

fn antonym(id: u32, clue: &str, answer: &str) -> Result<AntonymItem, AntonymItemError> {
    AntonymItem::new(ItemId::new(id), clue, answer)
}

fn antonyms() -> Result<Vec<AntonymItem>, AntonymItemError> {
    Ok(vec![
        antonym(1, "Calm", "excitable")?,
        antonym(2, "Crazy", "sensible")?,
        antonym(3, "Worthless", "valuable")?,
        antonym(4, "Happy", "miserable")?,
        antonym(5, "Impossible", "possible")?,
        antonym(6, "Cozy", "uncomfortable")?,
        antonym(7, "Useless", "usable")?,
        antonym(8, "Hidden", "visible")?,
        antonym(9, "Rigid / Stiff", "flexible")?,
        antonym(10, "Poisonous", "edible")?,
        antonym(11, "Silent", "audible")?,
        antonym(12, "Hateful", "lovable")?,
        antonym(13, "Permanent", "reversible")?,
        antonym(14, "Careless", "responsible")?,
        antonym(15, "Ordinary", "incredible")?,
    ])
}

//
// ─── YES/NO ────────────────────────────────────────────────────────────────────
//

fn yes_no_item(id: u32, question: &str, answer: bool) -> Result<YesNoItem, YesNoItemError> {
    YesNoItem::new(ItemId::new(id), question, answer)
}

fn yes_no() -> Result<Vec<YesNoItem>, YesNoItemError> {
    Ok(vec![
        yes_no_item(1, "Can a raincoat be reversible?", true)?,
        yes_no_item(2, "Are most glasses nonbreakable?", false)?,
        yes_no_item(3, "Is a monster usually horrible?", true)?,
        yes_no_item(4, "Can a dry forest be combustible?", true)?,
        yes_no_item(5, "Are your grades in school improvable?", true)?,
        yes_no_item(6, "Is your face washable?", true)?,
        yes_no_item(7, "Is spilled milk returnable?", false)?,
        yes_no_item(8, "Is a brick edible?", false)?,
        yes_no_item(9, "Is an invisible man easy to see?", false)?,
        yes_no_item(10, "Is a soft bed comfortable?", true)?,
        yes_no_item(11, "Is a rubber band flexible?", true)?,
        yes_no_item(12, "Is a superhero incredible?", true)?,
        yes_no_item(13, "Is the sun visible at night?", false)?,
        yes_no_item(14, "Is a puppy adorable?", true)?,
        yes_no_item(15, "Is a whisper audible in a storm?", false)?,
    ])
}

//
// ─── READING STORIES ───────────────────────────────────────────────────────────
//

fn question(
    text: &str,
    options: &[&str],
    correct: &str,
) -> Result<ReadingQuestion, ReadingError> {
    ReadingQuestion::new(text, owned(options), correct)
}

fn stories() -> Result<Vec<Story>, ReadingError> {
    Ok(vec![
        Story::new(
            StoryId::new(1),
            "An Unforgettable Cruise",
            owned(&[
                "One hazy day Nancy and her dad were cruising on their 36-foot sailboat on \
                 Lake Michigan. The weather report that morning was favorable so they headed \
                 for Muskegon.",
                "About noontime the sun disappeared, waves began to roll, and dense fog set \
                 in. Three miles offshore, land was suddenly invisible. It was incredible \
                 that the weather could be so changeable.",
                "Dad got out his compass and charts and began to take bearings. How far to \
                 Muskegon? It was possible that they were fairly close.",
                "Groping their way slowly through the dense fog was miserable. The fog was \
                 so thick now you could barely see the bow of the boat. Presently the \
                 channel light became visible, and they set their course toward it.",
                "Suddenly a terrible, thunderous sound startled them. Nancy looked up and \
                 there, looming behind them in the fog, was the unmistakable shape of a huge \
                 steamship. Would the ship see Nancy and her dad in this fog?",
            ]),
            vec![
                question(
                    "What was the weather like when they started?",
                    &["Horrible", "Favorable", "Invisible", "Miserable"],
                    "Favorable",
                )?,
                question(
                    "The land became _______ when the fog set in.",
                    &["Visible", "Invisible", "Changeable", "Unmistakable"],
                    "Invisible",
                )?,
                question(
                    "The sound of the steamship was:",
                    &["Quiet", "Terrible and Thunderous", "Combustible", "Playful"],
                    "Terrible and Thunderous",
                )?,
            ],
        )?,
        Story::new(
            StoryId::new(2),
            "The Incredible Robot",
            owned(&[
                "Tim decided to build a robot for the school science fair. His friends said \
                 it was impossible to build one in just a week, but Tim was a sensible boy \
                 who planned ahead.",
                "He used flexible plastic parts so the robot would not be breakable if it \
                 fell. The electronic sensors were very valuable, so he handled them with \
                 care.",
                "On the day of the fair, the robot worked perfectly! The judges said Tim's \
                 invention was remarkable. It could even do the dishes.",
                "Tim felt very capable. Winning the first prize trophy was tangible proof \
                 of his hard work.",
            ]),
            vec![
                question(
                    "What did Tim's friends think about his plan?",
                    &[
                        "It was sensible",
                        "It was impossible",
                        "It was favorable",
                        "It was invisible",
                    ],
                    "It was impossible",
                )?,
                question(
                    "Why did Tim use flexible plastic?",
                    &[
                        "So it was not breakable",
                        "So it was edible",
                        "So it was miserable",
                        "So it was combustible",
                    ],
                    "So it was not breakable",
                )?,
                question(
                    "The judges thought the invention was:",
                    &["Terrible", "Remarkable", "Changeable", "Valueless"],
                    "Remarkable",
                )?,
            ],
        )?,
        Story::new(
            StoryId::new(3),
            "The Enjoyable Picnic",
            owned(&[
                "The Smith family planned an enjoyable picnic in the park. Mom made sure \
                 all the food was edible and tasty.",
                "They brought a big, soft blanket that was very comfortable to sit on. Dad \
                 told some terrible jokes that made everyone groan, but they laughed anyway.",
                "Suddenly, it started to rain! They had to be flexible and move the picnic \
                 into the car.",
                "Even with the rain, it was a memorable day.",
            ]),
            vec![
                question(
                    "The blanket they brought was:",
                    &["Terrible", "Comfortable", "Breakable", "Invisible"],
                    "Comfortable",
                )?,
                question(
                    "How did the family feel about the picnic?",
                    &[
                        "It was enjoyable",
                        "It was miserable",
                        "It was horrible",
                        "It was impossible",
                    ],
                    "It was enjoyable",
                )?,
                question(
                    "When it rained, the family had to be:",
                    &["Rigid", "Flexible", "Combustible", "Valuable"],
                    "Flexible",
                )?,
            ],
        )?,
    ])
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
