use bot_session::ChatBot;

pub struct AppState {
    pub bot: ChatBot,
}

impl AppState {
    pub fn new(bot: ChatBot) -> Self {
        Self { bot }
    }
}
