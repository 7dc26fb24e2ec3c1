//! The compiled-in content table: résumé sections and terminal answers.

use crate::models::{Document, LineItem, PersonalHeader, Section, TerminalContent};

use super::PortfolioContent;

pub fn builtin_content() -> PortfolioContent {
    PortfolioContent {
        resume: resume(),
        terminal: terminal(),
    }
}

fn resume() -> Document {
    Document {
        title: "CURRICULUM VITAE".to_string(),
        header: PersonalHeader {
            name: "Bikash Sarraf".to_string(),
            email: "bikashsarraf83@gmail.com".to_string(),
            address: "Chabahil, Kathmandu".to_string(),
        },
        sections: vec![
            Section::new(
                "EDUCATION",
                vec![
                    LineItem::dated(
                        "Bachelor's in Cyber Security and Ethical Hacking",
                        "2024 - Present",
                    ),
                    LineItem::text(
                        "Softwarica College of IT and E-Commerce, Gyaneshwor, Kathmandu Nepal",
                    ),
                    LineItem::bullet("Current GPA: 3.8/4.0"),
                    LineItem::bullet(
                        "Relevant Coursework: Network Security, Ethical Hacking, Digital Forensics, \
                         Cryptography, Secure Software Development",
                    ),
                    LineItem::Spacer { height: 10.0 },
                    LineItem::dated("+2 Science (Biology) - 3.08 GPA", "2022 - 2024"),
                    LineItem::text("Xavier International College, Kalopul, Kathmandu Nepal"),
                    LineItem::Spacer { height: 10.0 },
                    LineItem::dated("SEE - 3.10 GPA", "2022"),
                    LineItem::text(
                        "Shree Sharaswasti English Boarding School, Lipanimal-3, Bara Nepal",
                    ),
                ],
            )
            .with_trailing_gap(20.0),
            Section::new(
                "PROFESSIONAL EXPERIENCE",
                vec![LineItem::bold("Currently no work experience")],
            ),
            Section::new(
                "SKILLS",
                vec![
                    LineItem::bullet(
                        "Programming: Intermediate HTML, C, Python, CSS, Node.js, React.js, MySQL, Bash, PHP",
                    ),
                    LineItem::bullet(
                        "Hacking: Practicing phishing, OSINT, session hacking, learning Pentesting & Bug Bounty",
                    ),
                    LineItem::bullet("Languages: English, Nepali, and more"),
                ],
            ),
            Section::new(
                "PROJECTS",
                vec![
                    LineItem::text("1. Keylogger (Python)"),
                    LineItem::bullet(
                        "Created a keylogger using Python. GitHub: https://github.com/Spydomain/keylogger",
                    ),
                    LineItem::Blank,
                    LineItem::text("2. Bike Rental Nepal (Node.js + React.js)"),
                    LineItem::bullet("Frontend: https://github.com/Spydomain/front"),
                    LineItem::bullet("Backend: https://github.com/Spydomain/backend"),
                    LineItem::Blank,
                    LineItem::text("3. CVE-2023-22809 Automated Exploits (Python)"),
                    LineItem::bullet(
                        "https://github.com/Spydomain/CVE-2023-22809-automated-python-exploits",
                    ),
                    LineItem::Blank,
                    LineItem::text("4. ClipboardAI (Bash Script)"),
                    LineItem::bullet("https://github.com/Spydomain/ClipboardAI"),
                    LineItem::Blank,
                    LineItem::text("5. NotesVista (Node.js+React.js)"),
                    LineItem::bullet("https://notesvista.netlify.app/"),
                    LineItem::Blank,
                    LineItem::text("6. FGE Identification Test Platform (Flutter)"),
                    LineItem::bullet("French Army vehicles/weapons identification application"),
                    LineItem::bullet("https://army-testgit-45113358-666ec.web.app"),
                ],
            ),
            Section::new(
                "CERTIFICATIONS",
                vec![
                    LineItem::bullet("Cisco Ethical Hacker Certified"),
                    LineItem::bullet("TryHackMe Presecurity Certified"),
                    LineItem::bullet("TryHackMe Cyber Security 101 Certified"),
                    LineItem::bullet("TryHackMe Advent of Cyber 2022 Certified"),
                    LineItem::bullet("TryHackMe Advent of Cyber 2023 Certified"),
                    LineItem::bullet("TryHackMe Advent of Cyber 2024 Certified"),
                    LineItem::bullet("Certified Cybersecurity Educator Professional (CCEP)"),
                    LineItem::bullet("Google Cybersecurity Professional Certificate"),
                    LineItem::bullet("CompTIA PenTest+ (PT0-002)"),
                ],
            )
            .with_trailing_gap(20.0),
            Section::new(
                "REFERENCES",
                vec![LineItem::bold("currently no references")],
            ),
        ],
    }
}

fn terminal() -> TerminalContent {
    TerminalContent {
        prompt: "root@bikash#".to_string(),
        welcome: "Welcome to Bikash's Portfolio Terminal\nType 'help' to see available commands\n\n"
            .to_string(),
        whoami: "I'm Bikash Sarraf, a Cybersecurity & Ethical Hacking Enthusiast from Kathmandu, \
                 Nepal. I'm currently studying at Softwarica College of IT and E-Commerce."
            .to_string(),
        education: "\u{1F393} Education:\n\
                    - BSc (Hons) in Cybersecurity and Ethical Hacking\n  \
                    Softwarica College of IT and E-Commerce, Kathmandu\n  \
                    Currently pursuing\n\n\
                    - +2 Science (Biology)\n  \
                    Xavier International College, Kalopul, Kathmandu\n  \
                    Graduated: 2024 | GPA: 3.08\n\n\
                    - SEE\n  \
                    Shree Sharaswasti English Boarding School, Lipanimal-3, Bara\n  \
                    Graduated: 2022 | GPA: 3.10"
            .to_string(),
        experience: "\u{1F4BC} Experience:\nCurrently seeking opportunities to apply my \
                     cybersecurity and ethical hacking skills in a professional environment."
            .to_string(),
        projects: "\u{1F680} Projects:\n\
                   1. Keylogger (Python)\n   \
                   - Created a keylogger using Python\n   \
                   - GitHub: github.com/Spydomain/keylogger\n\n\
                   2. Bike Rental Nepal (Node.js + React.js)\n   \
                   - Full-stack bike rental platform\n   \
                   - Frontend: github.com/Spydomain/front\n   \
                   - Backend: github.com/Spydomain/backend\n\n\
                   3. CVE-2023-22809 Automated Exploits (Python)\n   \
                   - Collection of automated exploits\n   \
                   - GitHub: github.com/Spydomain/CVE-2023-22809-automated-python-exploits\n\n\
                   4. ClipboardAI (Bash)\n   \
                   - AI-powered clipboard manager\n   \
                   - GitHub: github.com/Spydomain/ClipboardAI\n\n\
                   5. NotesVista (Node.js+React.js)\n   \
                   - Note-taking application\n   \
                   - Live: notesvista.netlify.app\n\n\
                   6. FGE Identification Test Platform (Flutter)\n   \
                   - French Army vehicles/weapons identification application\n   \
                   - Live: https://army-testgit-45113358-666ec.web.app\n"
            .to_string(),
        contact: "\u{1F4E7} Contact Information:\n\
                  - Email: bikashsarraf83@gmail.com\n\
                  - Location: Kathmandu, Nepal\n\
                  - LinkedIn: linkedin.com/in/bikash-sarraf-683787320\n\
                  - GitHub: github.com/Spydomain\n\n\
                  Feel free to reach out for collaborations or just to say hi!"
            .to_string(),
        certifications: "\u{1F393} Certifications:\n\
                         - Cisco Certified Ethical Hacker\n\
                         - Tryhackme Pre-Security Certified\n\
                         - Tryhackme Cyber Security 101 Certified\n\
                         - Advent of cyber 2022 Certified\n\
                         - Advent of cyber 2023 Certified\n\
                         - Advent of cyber 2024 Certified\n\
                         - Certified Cybersecurity Educator Professional (CCEP)\n\
                         - Google Cybersecurity Professional Certificate\n\
                         - CompTIA PenTest+ (PT0-002)"
            .to_string(),
        social: "\u{1F310} Social Media:\n\
                 - GitHub: github.com/Spydomain\n\
                 - LinkedIn: linkedin.com/in/bikash-sarraf-683787320\n\
                 - Instagram: instagram.com/bikash.sarraf.399\n\
                 - Facebook: facebook.com/bikash.sarraf.399\n\
                 - TryHackMe: tryhackme.com/p/bikashsarraf"
            .to_string(),
    }
}
