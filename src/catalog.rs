//! Static catalog of document templates.
//!
//! A template is a declarative list of text placements per page — data, not
//! code. The same records serve two consumers: [`seed_text`] replays them
//! onto a capturing surface to pre-fill composer pages, and [`render`]
//! replays them onto a real drawing surface. Templates are baked in;
//! nothing here is created, updated, or deleted at runtime.

use crate::errors::AppError;
use crate::pdf::{FontStyle, Surface, TextCapture};

/// One positioned text fragment.
#[derive(Debug, Clone, Copy)]
pub struct Placement {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub bold: bool,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct DocTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub pages: &'static [&'static [Placement]],
}

const fn heading(text: &'static str) -> Placement {
    Placement {
        x: 160.0,
        y: 770.0,
        size: 14.0,
        bold: true,
        text,
    }
}

const fn line(y: f32, text: &'static str) -> Placement {
    Placement {
        x: 50.0,
        y,
        size: 11.0,
        bold: false,
        text,
    }
}

const AFFIDAVIT_PAGE: &[Placement] = &[
    heading("AFFIDAVIT"),
    line(730.0, "REPUBLIC OF KENYA"),
    line(712.0, "IN THE HIGH COURT OF KENYA AT NAIROBI"),
    line(694.0, "CIVIL CASE NO. ........ OF 20......"),
    line(658.0, "I, [FULL NAME], of Post Office Box Number [ADDRESS], [TOWN], an adult of"),
    line(640.0, "sound mind, do hereby make oath and state as follows:"),
    line(604.0, "1. THAT I am the deponent herein and competent to swear this affidavit."),
    line(586.0, "2. THAT the facts deposed to herein are within my own knowledge unless"),
    line(568.0, "   otherwise stated, and are true to the best of my knowledge and belief."),
    line(532.0, "3. THAT [STATE THE FACTS RELIED UPON]."),
    line(496.0, "SWORN at [TOWN] by the said [FULL NAME]"),
    line(478.0, "this ........ day of .................... 20......"),
    line(442.0, "Before me: ........................................ Commissioner for Oaths"),
];

const SUMMONS_PAGE: &[Placement] = &[
    heading("SUMMONS TO ENTER APPEARANCE"),
    line(730.0, "REPUBLIC OF KENYA"),
    line(712.0, "IN THE [COURT NAME] AT [TOWN]"),
    line(694.0, "CASE NO. ........ OF 20......"),
    line(658.0, "TO: [DEFENDANT'S FULL NAME] of [ADDRESS]"),
    line(622.0, "YOU ARE HEREBY SUMMONED to enter an appearance in the above suit within"),
    line(604.0, "fifteen (15) days of service of this summons upon you, and to file a defence"),
    line(586.0, "within fourteen (14) days of entering appearance."),
    line(550.0, "TAKE NOTICE that in default of appearance and defence within the time"),
    line(532.0, "stated, the suit may be heard and judgment entered in your absence."),
    line(496.0, "ISSUED at [TOWN] this ........ day of .................... 20......"),
    line(460.0, "........................................ Deputy Registrar"),
];

const CONTRACT_PAGE: &[Placement] = &[
    heading("AGREEMENT FOR SERVICES"),
    line(730.0, "THIS AGREEMENT is made this ........ day of .................... 20......"),
    line(712.0, "BETWEEN [PARTY A] of [ADDRESS] (the \"Client\")"),
    line(694.0, "AND [PARTY B] of [ADDRESS] (the \"Service Provider\")."),
    line(658.0, "WHEREAS the Client wishes to engage the Service Provider, the parties"),
    line(640.0, "agree as follows:"),
    line(604.0, "1. SERVICES. The Service Provider shall render [DESCRIBE SERVICES]."),
    line(586.0, "2. CONSIDERATION. The Client shall pay KES [AMOUNT] in the manner set"),
    line(568.0, "   out in the schedule hereto."),
    line(550.0, "3. TERM. This Agreement commences on [DATE] and continues until [DATE]."),
    line(532.0, "4. TERMINATION. Either party may terminate by [NOTICE PERIOD] written notice."),
    line(514.0, "5. GOVERNING LAW. This Agreement is governed by the laws of Kenya."),
    line(478.0, "SIGNED by the parties on the date first above written."),
    line(442.0, "Client: ..............................    Service Provider: .............................."),
];

const WITNESS_PAGE: &[Placement] = &[
    heading("WITNESS STATEMENT"),
    line(730.0, "REPUBLIC OF KENYA"),
    line(712.0, "IN THE [COURT NAME] AT [TOWN]"),
    line(694.0, "CASE NO. ........ OF 20......"),
    line(658.0, "STATEMENT OF [WITNESS FULL NAME]"),
    line(622.0, "I, [WITNESS FULL NAME], of [ADDRESS], [OCCUPATION], state as follows:"),
    line(586.0, "1. [SET OUT WHAT THE WITNESS SAW, HEARD OR DID, IN NUMBERED"),
    line(568.0, "   PARAGRAPHS AND IN THE WITNESS'S OWN WORDS]."),
    line(532.0, "I believe the facts stated in this witness statement are true."),
    line(496.0, "Signed: ........................................"),
    line(478.0, "Dated this ........ day of .................... 20......"),
];

const POA_PAGE: &[Placement] = &[
    heading("POWER OF ATTORNEY"),
    line(730.0, "KNOW ALL PERSONS BY THESE PRESENTS that I, [DONOR FULL NAME], of"),
    line(712.0, "[ADDRESS], do hereby appoint [ATTORNEY FULL NAME] of [ADDRESS] to be my"),
    line(694.0, "true and lawful attorney in my name and on my behalf to do the following:"),
    line(658.0, "1. To [FIRST POWER CONFERRED]."),
    line(640.0, "2. To [SECOND POWER CONFERRED]."),
    line(622.0, "3. Generally to do all such acts as my attorney considers necessary for"),
    line(604.0, "   the purposes aforesaid, as fully as I could do in person."),
    line(568.0, "AND I HEREBY RATIFY everything my attorney shall lawfully do by virtue"),
    line(550.0, "of this Power of Attorney."),
    line(514.0, "IN WITNESS WHEREOF I have executed this deed this ........ day of"),
    line(496.0, ".................... 20......"),
    line(460.0, "Donor: ........................    Witness: ........................"),
];

pub const TEMPLATES: &[DocTemplate] = &[
    DocTemplate {
        id: "affidavit",
        name: "Affidavit",
        description: "Sworn statement of fact for filing in court",
        pages: &[AFFIDAVIT_PAGE],
    },
    DocTemplate {
        id: "summons",
        name: "Summons",
        description: "Summons to enter appearance in a civil suit",
        pages: &[SUMMONS_PAGE],
    },
    DocTemplate {
        id: "contract",
        name: "Service Contract",
        description: "Agreement for services between two parties",
        pages: &[CONTRACT_PAGE],
    },
    DocTemplate {
        id: "witness-statement",
        name: "Witness Statement",
        description: "Numbered statement of a witness's evidence",
        pages: &[WITNESS_PAGE],
    },
    DocTemplate {
        id: "power-of-attorney",
        name: "Power of Attorney",
        description: "Deed appointing an attorney to act for the donor",
        pages: &[POA_PAGE],
    },
];

/// The full catalog, stable order, no side effects.
pub fn all() -> &'static [DocTemplate] {
    TEMPLATES
}

pub fn find(id: &str) -> Option<&'static DocTemplate> {
    TEMPLATES.iter().find(|t| t.id == id)
}

/// Replay a template's placements onto a surface.
pub fn render<S: Surface>(template: &DocTemplate, surface: &mut S) {
    for (i, page) in template.pages.iter().enumerate() {
        if i > 0 {
            surface.add_page();
        }
        for placement in page.iter() {
            surface.set_font(if placement.bold {
                FontStyle::Bold
            } else {
                FontStyle::Regular
            });
            surface.set_font_size(placement.size);
            surface.text(placement.text, placement.x, placement.y);
        }
    }
}

/// Seed text for the composer: every placed string of the template, in call
/// order, newline-separated. Textual extraction only — no layout.
pub fn seed_text(id: &str) -> Result<String, AppError> {
    let template = find(id).ok_or(AppError::NotFound)?;
    let mut capture = TextCapture::new();
    render(template, &mut capture);
    Ok(capture.joined())
}
