use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Gender {
    Female,
    Male,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Age {
    Toddlers,
    Children,
    PreTeens,
    Teens,
    YoungAdults,
    Adults,
    MiddleAges,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum AspectRatio {
    Portrait,
    Square,
    Landscape,
}

/// The user's style choices for one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub gender: Gender,
    pub age: Age,
    pub aspect_ratio: AspectRatio,
}

impl Default for Selection {
    fn default() -> Self {
        Selection {
            gender: Gender::Female,
            age: Age::YoungAdults,
            aspect_ratio: AspectRatio::Portrait,
        }
    }
}

impl Selection {
    pub fn descriptor(&self) -> &'static str {
        descriptor(self.gender, self.age)
    }
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Female, Gender::Male];

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
        }
    }
}

impl Age {
    pub const ALL: [Age; 7] = [
        Age::Toddlers,
        Age::Children,
        Age::PreTeens,
        Age::Teens,
        Age::YoungAdults,
        Age::Adults,
        Age::MiddleAges,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Age::Toddlers => "Toddlers (2-4)",
            Age::Children => "Children (5-8)",
            Age::PreTeens => "Pre-teens (9-12)",
            Age::Teens => "Teens (13-17)",
            Age::YoungAdults => "Young Adults (18-25)",
            Age::Adults => "Adults (26-35)",
            Age::MiddleAges => "Middle Ages (36-50)",
        }
    }
}

impl AspectRatio {
    pub const ALL: [AspectRatio; 3] = [
        AspectRatio::Portrait,
        AspectRatio::Square,
        AspectRatio::Landscape,
    ];

    pub fn ratio(&self) -> &'static str {
        match self {
            AspectRatio::Portrait => "3:4",
            AspectRatio::Square => "1:1",
            AspectRatio::Landscape => "16:9",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AspectRatio::Portrait => "Portrait (3:4)",
            AspectRatio::Square => "Square (1:1)",
            AspectRatio::Landscape => "Landscape (16:9)",
        }
    }

    /// Phrase substituted into the prompt; the remote side takes no
    /// separate aspect-ratio parameter.
    pub fn phrase(&self) -> &'static str {
        match self {
            AspectRatio::Portrait => "portrait 3:4 ratio",
            AspectRatio::Square => "square 1:1 ratio",
            AspectRatio::Landscape => "landscape 16:9 ratio",
        }
    }
}

pub fn descriptor(gender: Gender, age: Age) -> &'static str {
    match (gender, age) {
        (Gender::Male, Age::Toddlers) => "toddler boy 2–4 years",
        (Gender::Male, Age::Children) => "boy 5–8 years",
        (Gender::Male, Age::PreTeens) => "pre-teen boy 9–12 years",
        (Gender::Male, Age::Teens) => "teenage boy 13–17 years",
        (Gender::Male, Age::YoungAdults) => "young man 18–25 years",
        (Gender::Male, Age::Adults) => "man 26–35 years",
        (Gender::Male, Age::MiddleAges) => "middle-aged man 36–50 years",
        (Gender::Female, Age::Toddlers) => "toddler girl 2–4 years",
        (Gender::Female, Age::Children) => "girl 5–8 years",
        (Gender::Female, Age::PreTeens) => "pre-teen girl 9–12 years",
        (Gender::Female, Age::Teens) => "teenage girl 13–17 years",
        (Gender::Female, Age::YoungAdults) => "young woman 18–25 years",
        (Gender::Female, Age::Adults) => "woman 26–35 years",
        (Gender::Female, Age::MiddleAges) => "middle-aged woman 36–50 years",
    }
}
