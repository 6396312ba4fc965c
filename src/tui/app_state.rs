use crate::core::ReviewSession;
use crate::error::FlashcardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Review,
    DeckPicker,
    NewDeck,
    AddCard,
}

/// Which input of the add card dialog receives typing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Term,
    Definition,
}

/// Modal message drawn over everything else
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub message: String,
    pub is_error: bool,
}

pub struct TuiState {
    pub session: ReviewSession,
    pub mode: Mode,

    // Deck picker
    pub picker_selected: usize,

    // Dialog inputs
    pub deck_name_input: String,
    pub term_input: String,
    pub definition_input: String,
    pub focus: Field,

    pub notice: Option<Notice>,
    pub quit: bool,
}

impl TuiState {
    pub fn new(session: ReviewSession) -> Self {
        Self {
            session,
            mode: Mode::Review,
            picker_selected: 0,
            deck_name_input: String::new(),
            term_input: String::new(),
            definition_input: String::new(),
            focus: Field::Term,
            notice: None,
            quit: false,
        }
    }

    pub fn show_answer(&mut self) {
        self.session.show_answer();
    }

    pub async fn next_card(&mut self) {
        if !self.session.can_review() {
            return;
        }
        if let Err(e) = self.session.next_card().await {
            self.report(e);
        }
    }

    pub fn open_deck_picker(&mut self) {
        let decks = self.session.decks();
        if decks.is_empty() {
            self.notice = Some(Notice {
                title: "No decks",
                message: "Press 'N' to create a deck first.".to_string(),
                is_error: false,
            });
            return;
        }

        self.picker_selected = self
            .session
            .selected_deck()
            .and_then(|selected| decks.iter().position(|d| d.id == selected.id))
            .unwrap_or(0);
        self.mode = Mode::DeckPicker;
    }

    pub fn picker_move_down(&mut self) {
        if self.picker_selected + 1 < self.session.decks().len() {
            self.picker_selected += 1;
        }
    }

    pub fn picker_move_up(&mut self) {
        self.picker_selected = self.picker_selected.saturating_sub(1);
    }

    pub async fn pick_deck(&mut self) {
        let Some(name) = self
            .session
            .decks()
            .get(self.picker_selected)
            .map(|d| d.name.clone())
        else {
            self.mode = Mode::Review;
            return;
        };

        self.mode = Mode::Review;
        if let Err(e) = self.session.select_deck(&name).await {
            self.report(e);
        }
    }

    pub fn open_new_deck(&mut self) {
        self.deck_name_input.clear();
        self.mode = Mode::NewDeck;
    }

    pub fn open_add_card(&mut self) {
        if self.session.selected_deck().is_none() {
            self.notice = Some(Notice {
                title: "No deck",
                message: FlashcardError::NoDeckSelected.to_string(),
                is_error: false,
            });
            return;
        }

        self.term_input.clear();
        self.definition_input.clear();
        self.focus = Field::Term;
        self.mode = Mode::AddCard;
    }

    /// On failure the dialog stays open with an error on top of it
    pub async fn submit_new_deck(&mut self) {
        match self.session.create_deck(&self.deck_name_input).await {
            Ok(_) => {
                self.deck_name_input.clear();
                self.mode = Mode::Review;
            }
            Err(e) => self.report(e),
        }
    }

    pub async fn submit_add_card(&mut self) {
        match self
            .session
            .add_card(&self.term_input, &self.definition_input)
            .await
        {
            Ok(_) => {
                self.term_input.clear();
                self.definition_input.clear();
                self.mode = Mode::Review;
            }
            Err(e) => self.report(e),
        }
    }

    pub fn cancel_dialog(&mut self) {
        self.deck_name_input.clear();
        self.term_input.clear();
        self.definition_input.clear();
        self.mode = Mode::Review;
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Field::Term => Field::Definition,
            Field::Definition => Field::Term,
        };
    }

    /// Input buffer that typing goes to in the current mode
    pub fn active_input(&mut self) -> Option<&mut String> {
        match self.mode {
            Mode::NewDeck => Some(&mut self.deck_name_input),
            Mode::AddCard => match self.focus {
                Field::Term => Some(&mut self.term_input),
                Field::Definition => Some(&mut self.definition_input),
            },
            Mode::Review | Mode::DeckPicker => None,
        }
    }

    fn report(&mut self, err: FlashcardError) {
        let title = if err.is_validation() {
            "Invalid input"
        } else {
            tracing::warn!(error = %err, "action failed");
            "Error"
        };

        self.notice = Some(Notice {
            title,
            message: err.user_message(),
            is_error: true,
        });
    }
}
