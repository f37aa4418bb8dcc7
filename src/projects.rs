#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub stack: &'static [&'static str],
    pub repo: Option<&'static str>,
    pub demo: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactLink {
    pub label: &'static str,
    pub text: &'static str,
    pub href: &'static str,
}

pub const OWNER_NAME: &str = "Eng Fortune Abohwo";
pub const OWNER_TAGLINE: &str = "AI Engineer • NLP & LLM Specialist";

macro_rules! repo_link {
    ($slug:literal) => {
        concat!("https://github.com/Ejiro2/ai-portfolio/tree/main/projects/", $slug)
    };
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: "01",
        title: "AI Engineer’s Python Toolkit",
        description: "Data automation tools demonstrating Python scripting mastery.",
        stack: &["Python", "Pandas", "Automation"],
        repo: Some(repo_link!("01-python-toolkit")),
        demo: None,
    },
    Project {
        id: "02",
        title: "Fake News NLP Classifier",
        description: "Machine learning model to detect fake news using NLP.",
        stack: &["scikit-learn", "NLTK", "TF-IDF"],
        repo: Some(repo_link!("02-fake-news-nlp")),
        demo: None,
    },
    Project {
        id: "03",
        title: "LLM Study Assistant",
        description: "Upload notes or PDFs and get GPT-powered summaries and Q&A.",
        stack: &["LangChain", "HuggingFace", "HTML", "CSS"],
        repo: Some(repo_link!("03-HugginFace-study-assistant")),
        demo: None,
    },
    Project {
        id: "04",
        title: "RAG Knowledge Bot",
        description: "Retrieval-Augmented chatbot that answers questions from your data.",
        stack: &["LangChain", "Pinecone", "FastAPI"],
        repo: Some(repo_link!("04-rag-knowledge-bot")),
        demo: None,
    },
    Project {
        id: "05",
        title: "Semantic Search Engine",
        description: "A semantic text search using embeddings and vector database.",
        stack: &["OpenAI Embeddings", "Pinecone"],
        repo: Some(repo_link!("05-semantic-search")),
        demo: None,
    },
    Project {
        id: "06",
        title: "Vector Database Manipulation",
        description: "Vector database manipulation using various embedding models.",
        stack: &["Whisper", "Streamlit"],
        repo: Some(repo_link!("06-vector-database-manipulation")),
        demo: None,
    },
    Project {
        id: "07",
        title: "Speech-to-Text Audio Summarizer",
        description: "Audio transcription and summarization app using Whisper and GPT-3.",
        stack: &["Whisper", "Streamlit"],
        repo: Some(repo_link!("07-speech-recognition")),
        demo: None,
    },
];

pub const SKILLS: &[&str] = &[
    "Python",
    "NLP",
    "LLMs",
    "LangChain",
    "Pinecone",
    "HF Models",
    "Whisper",
    "Streamlit",
];

pub const FOCUS_AREAS: &[&str] = &[
    "Data processing & feature engineering",
    "Model training, fine-tuning, and evaluation",
    "Retrieval-Augmented Generation & semantic search",
    "Speech recognition and multimodal prototype systems",
];

pub const CONTACT_LINKS: &[ContactLink] = &[
    ContactLink {
        label: "Email",
        text: "ejiroabohwo2@gmail.com",
        href: "mailto:ejiroabohwo2@gmail.com",
    },
    ContactLink {
        label: "LinkedIn",
        text: "linkedin.com/in/ejiro2",
        href: "https://www.linkedin.com/in/ejiro2",
    },
];
