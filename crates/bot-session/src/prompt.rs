use bot_core::Turn;

pub const DEFAULT_EOS_TOKEN: &str = "<|endoftext|>";

const BOT_LABEL: &str = "Bot:";

/// Render turns plus the pending message as a `Human:`/`Bot:` transcript ending
/// in a bare `Bot:` cue.
pub fn build_prompt(turns: &[Turn], message: &str, eos_token: &str) -> String {
    let mut prompt = String::new();

    for turn in turns {
        prompt.push_str(&format!("Human: {}{}", turn.user, eos_token));
        prompt.push_str(&format!("Bot: {}{}", turn.bot, eos_token));
    }

    prompt.push_str(&format!("Human: {}{}{}", message, eos_token, BOT_LABEL));
    prompt
}

/// Cut the prompt off the generated text and clean up what is left.
///
/// Returns an empty string when the model produced nothing usable.
pub fn extract_reply(generated: &str, prompt: &str) -> String {
    let continuation = match generated.strip_prefix(prompt) {
        Some(rest) => rest,
        None => {
            // Decoding may not reproduce the prompt byte for byte; fall back to
            // skipping the prompt's length in characters.
            let offset = generated
                .char_indices()
                .nth(prompt.chars().count())
                .map(|(index, _)| index)
                .unwrap_or(generated.len());
            &generated[offset..]
        }
    };

    let reply = continuation.trim();
    reply
        .strip_prefix(BOT_LABEL)
        .map(str::trim)
        .unwrap_or(reply)
        .to_string()
}
