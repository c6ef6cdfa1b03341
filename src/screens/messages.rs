//! Messages screen. Conversations are static; nothing is sent anywhere.

use serde::Serialize;

use crate::session::Role;

#[derive(Debug, Clone, Serialize)]
pub struct Conversation {
    pub id: u32,
    pub name: &'static str,
    pub last_message: &'static str,
    pub time: &'static str,
    pub unread: bool,
    pub avatar: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatLine {
    pub from_me: bool,
    pub text: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessagesView {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub unread_count: usize,
    pub conversations: Vec<Conversation>,
    pub open_conversation: &'static str,
    pub transcript: Vec<ChatLine>,
}

pub fn view(role: Role) -> MessagesView {
    let buyer = role == Role::Buyer;
    let pick = |for_buyer: &'static str, for_seller: &'static str| {
        if buyer { for_buyer } else { for_seller }
    };

    let conversations = vec![
        Conversation {
            id: 1,
            name: pick("TechSolutions Pro", "GlobalCorp Inc"),
            last_message: "Thanks for the proposal. When can we start?",
            time: "2h ago",
            unread: true,
            avatar: "TS",
        },
        Conversation {
            id: 2,
            name: pick("Creative Design Studio", "StartupX"),
            last_message: "The design looks great! Can you make a few adjustments?",
            time: "5h ago",
            unread: false,
            avatar: "CD",
        },
        Conversation {
            id: 3,
            name: pick("Marketing Experts", "Enterprise Solutions"),
            last_message: "Project completed successfully. Thank you!",
            time: "1d ago",
            unread: false,
            avatar: "ME",
        },
    ];

    MessagesView {
        title: "Messages",
        subtitle: pick("Stay connected with your sellers", "Stay connected with your buyers"),
        unread_count: conversations.iter().filter(|c| c.unread).count(),
        open_conversation: conversations[0].name,
        conversations,
        transcript: vec![
            ChatLine {
                from_me: false,
                text: "Hi! I've reviewed your project requirements. I can definitely help you with this.",
            },
            ChatLine {
                from_me: true,
                text: "Great! What's your timeline and budget for this project?",
            },
            ChatLine {
                from_me: false,
                text: "I can complete this within 2-3 weeks. My rate for this type of project is $5,000. \
                       Would you like to see some examples of similar work?",
            },
            ChatLine {
                from_me: true,
                text: "Yes, please share your portfolio. The timeline works for us.",
            },
        ],
    }
}
