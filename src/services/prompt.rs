use base64::Engine;

use crate::models::locale::Locale;

/// Media type assumed when the upload does not declare one.
pub const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

const SYSTEM_EN: &str = "Return only valid JSON. No markdown.";

const SYSTEM_RU: &str = "Отвечай только валидным JSON. Без markdown.";

const PROMPT_EN: &str = concat!(
    "You are a professional botanist assistant. Analyze the provided flower photo ",
    "and return ONLY a compact JSON object with the following keys:\n",
    "{\n",
    "  \"flower_name\": string, // common name, plus latin in parentheses if known\n",
    "  \"watering_schedule\": string, // concise schedule with frequency and volume tips\n",
    "  \"care_recommendations\": string[], // actionable bullet tips\n",
    "  \"health_assessment\": string, // short assessment of current health from the photo\n",
    "  \"confidence\": number, // 0..1 confidence in identification\n",
    "  \"issues\": string[], // potential problems seen (e.g., overwatering, pests)\n",
    "  \"tips\": string[], // short extra tips\n",
    "  \"sources\": string[] // 1-3 reputable links for further reading\n",
    "}\n",
    "Keep it realistic. If identification is uncertain, say so and provide 2-3 likely candidates."
);

const PROMPT_RU: &str = concat!(
    "Ты профессиональный ассистент-ботаник. Проанализируй фото цветка ",
    "и верни ТОЛЬКО компактный JSON-объект со следующими ключами:\n",
    "{\n",
    "  \"flower_name\": string, // общеупотребительное название, латинское в скобках, если известно\n",
    "  \"watering_schedule\": string, // краткий график полива с частотой и объёмом\n",
    "  \"care_recommendations\": string[], // практические советы по уходу\n",
    "  \"health_assessment\": string, // краткая оценка состояния растения по фото\n",
    "  \"confidence\": number, // уверенность в определении от 0 до 1\n",
    "  \"issues\": string[], // замеченные проблемы (например, перелив, вредители)\n",
    "  \"tips\": string[], // короткие дополнительные советы\n",
    "  \"sources\": string[] // 1-3 ссылки на надёжные источники\n",
    "}\n",
    "Ключи оставь на английском, все текстовые значения пиши на русском языке. ",
    "Будь реалистичен. Если определение неуверенное, скажи об этом и предложи 2-3 вероятных варианта."
);

pub fn system_instruction(locale: Locale) -> &'static str {
    match locale {
        Locale::En => SYSTEM_EN,
        Locale::Ru => SYSTEM_RU,
    }
}

/// Instruction text sent next to the image, describing the exact JSON shape.
pub fn analysis_prompt(locale: Locale) -> &'static str {
    match locale {
        Locale::En => PROMPT_EN,
        Locale::Ru => PROMPT_RU,
    }
}

/// Inline the image as `data:<mime>;base64,<payload>`.
pub fn to_data_url(mime: Option<&str>, bytes: &[u8]) -> String {
    let mime = mime
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .unwrap_or(DEFAULT_IMAGE_MIME);

    format!(
        "data:{};base64,{}",
        mime,
        base64::engine::general_purpose::STANDARD.encode(bytes)
    )
}
