#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    AspectRatioDescription,
    Descriptor,
}

impl Field {
    fn token(&self) -> &'static str {
        match self {
            Field::AspectRatioDescription => "{aspectRatioDescription}",
            Field::Descriptor => "{descriptor}",
        }
    }

    const ALL: [Field; 2] = [Field::AspectRatioDescription, Field::Descriptor];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Field(Field),
}

/// A prompt template held as ordered segments. Each field appears at most
/// once, so rendering can neither leave a token behind nor substitute twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    segments: Vec<Segment>,
}

impl PromptTemplate {
    /// Splits `text` on the first occurrence of each known field token.
    /// Repeated or unknown tokens stay literal.
    pub fn parse(text: &str) -> Self {
        let mut found: Vec<(usize, Field)> = Field::ALL
            .iter()
            .filter_map(|field| text.find(field.token()).map(|at| (at, *field)))
            .collect();
        found.sort_by_key(|(at, _)| *at);

        let mut segments = Vec::new();
        let mut cursor = 0;
        for (at, field) in found {
            if at < cursor {
                continue;
            }
            if at > cursor {
                segments.push(Segment::Literal(text[cursor..at].to_string()));
            }
            segments.push(Segment::Field(field));
            cursor = at + field.token().len();
        }
        if cursor < text.len() {
            segments.push(Segment::Literal(text[cursor..].to_string()));
        }

        PromptTemplate { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn render(&self, descriptor: &str, aspect_ratio_description: &str) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Literal(text) => text.as_str(),
                Segment::Field(Field::Descriptor) => descriptor,
                Segment::Field(Field::AspectRatioDescription) => aspect_ratio_description,
            })
            .collect()
    }
}

pub const EDITORIAL_TEMPLATE: &str = "Create an ultra-photorealistic cinematic editorial fashion portrait in a {aspectRatioDescription}.
The subject is a realistic {descriptor} Indonesian model wearing the exact, complete outfit (details, colors, fabric texture)
from the uploaded product photo.

Setting: A professional photo studio with a plain, seamless, solid light-gray background.

Pose:
As the Photographer, creatively innovate a natural, elegant pose and shot composition that best highlights the outfit
and the model’s personality — while maintaining a clean, airy, cinematic studio aesthetic.
(Examples: full-body shot showing the outfit’s flow, half-body highlighting fabric, or a candid seated pose that feels spontaneous yet graceful.)

Expression: calm, dreamy, and inviting, with subtle emotional depth fitting the cinematic tone.

Watermark:
Incorporate the exact uploaded logo as a subtle, semi-transparent watermark
in the bottom-right corner of the image. Maintain original proportions and natural blending.

Aesthetic: dreamy Korean movie still — cinematic, soft airy atmosphere, pastel tones, subtle film grain.
Lighting: diffused daylight, soft key light 45° left, gentle fill right, creamy shadows, subtle haze.
Camera: cinematic full-frame look, 85mm lens, aperture f/2.8, ISO 100, shallow depth of field,
eye-level framing.

Negative Prompt:
harsh shadows, direct sunlight, oversaturated colors, busy background, distorted anatomy,
unrealistic skin, cartoon, 3D render, poorly drawn hands, text, extra watermark, blurry product, mismatched outfit.";

pub fn editorial_template() -> PromptTemplate {
    PromptTemplate::parse(EDITORIAL_TEMPLATE)
}

pub fn build_prompt(descriptor: &str, aspect_ratio_description: &str) -> String {
    let template = editorial_template();
    log::trace!("Rendering prompt from {} segments", template.segments().len());
    template.render(descriptor, aspect_ratio_description)
}
