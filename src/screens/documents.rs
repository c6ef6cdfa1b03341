//! Documents screen. Uploads and downloads are not wired to any storage.

use serde::Serialize;

use crate::session::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DocumentStatus {
    Signed,
    Draft,
    Approved,
    Paid,
    Pending,
}

/// Colour family a status badge is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTone {
    Positive,
    Pending,
    Neutral,
}

impl DocumentStatus {
    pub fn tone(&self) -> StatusTone {
        match self {
            Self::Signed | Self::Approved | Self::Paid => StatusTone::Positive,
            Self::Pending => StatusTone::Pending,
            Self::Draft => StatusTone::Neutral,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Signed | Self::Approved)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Document {
    pub id: u32,
    pub name: &'static str,
    pub file_type: &'static str,
    pub size: &'static str,
    pub date: &'static str,
    pub status: DocumentStatus,
    pub tone: StatusTone,
    pub category: &'static str,
    pub shared_with: Option<&'static str>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentCounts {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub drafts: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentsView {
    pub title: &'static str,
    pub documents: Vec<Document>,
    pub counts: DocumentCounts,
}

#[allow(clippy::too_many_arguments)]
fn document(
    id: u32,
    name: &'static str,
    file_type: &'static str,
    size: &'static str,
    date: &'static str,
    status: DocumentStatus,
    category: &'static str,
    shared_with: Option<&'static str>,
) -> Document {
    Document {
        id,
        name,
        file_type,
        size,
        date,
        status,
        tone: status.tone(),
        category,
        shared_with,
    }
}

pub fn view(role: Role) -> DocumentsView {
    let buyer = role == Role::Buyer;
    let with = |for_buyer, for_seller| Some(if buyer { for_buyer } else { for_seller });

    let documents = vec![
        document(
            1,
            "Project Proposal - Web Development",
            "PDF",
            "2.4 MB",
            "2024-01-15",
            DocumentStatus::Signed,
            "Proposals",
            with("TechSolutions Pro", "GlobalCorp Inc"),
        ),
        document(
            2,
            "Service Agreement Template",
            "DOCX",
            "1.2 MB",
            "2024-01-10",
            DocumentStatus::Draft,
            "Contracts",
            None,
        ),
        document(
            3,
            "Project Requirements Specification",
            "PDF",
            "3.1 MB",
            "2024-01-08",
            DocumentStatus::Approved,
            "Requirements",
            with("Creative Design Studio", "StartupX"),
        ),
        document(
            4,
            "Invoice #2024-001",
            "PDF",
            "856 KB",
            "2024-01-05",
            DocumentStatus::Paid,
            "Invoices",
            with("Marketing Experts", "HealthTech Solutions"),
        ),
        document(
            5,
            "NDA Agreement",
            "PDF",
            "1.8 MB",
            "2024-01-03",
            DocumentStatus::Pending,
            "Legal",
            with("TechSolutions Pro", "GlobalCorp Inc"),
        ),
    ];

    let counts = count(&documents);
    DocumentsView {
        title: "Documents",
        documents,
        counts,
    }
}

fn count(documents: &[Document]) -> DocumentCounts {
    documents
        .iter()
        .fold(DocumentCounts::default(), |mut acc, doc| {
            acc.total += 1;
            if doc.status.is_complete() {
                acc.completed += 1;
            }
            match doc.status {
                DocumentStatus::Pending => acc.pending += 1,
                DocumentStatus::Draft => acc.drafts += 1,
                _ => {}
            }
            acc
        })
}
