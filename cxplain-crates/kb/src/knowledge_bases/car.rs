use crate::BinaryDomain;
use crate::KnowledgeBase;
use crate::KnowledgeBaseError;
use crate::Literal;

/// The car configuration knowledge base from "Elimination of spurious explanations" by G.
/// Friedrich.
///
/// All variables have the domain `{n, y}`.
pub fn car_configuration() -> Result<KnowledgeBase, KnowledgeBaseError> {
    let mut kb = KnowledgeBase::new("Car Configuration Problem");

    let biz_park = kb.add_variable("biz-park", BinaryDomain::yes_no())?;
    let rec_park = kb.add_variable("rec-park", BinaryDomain::yes_no())?;
    let video = kb.add_variable("video", BinaryDomain::yes_no())?;
    let sensor = kb.add_variable("sensor", BinaryDomain::yes_no())?;
    let gsm_radio = kb.add_variable("GSM-radio", BinaryDomain::yes_no())?;
    let easy_parking = kb.add_variable("easy-parking", BinaryDomain::yes_no())?;
    let free_com = kb.add_variable("free-com", BinaryDomain::yes_no())?;

    let _ = kb.add_constraint(
        "rec-park <-> video",
        vec![
            vec![Literal::negative(rec_park), Literal::positive(video)],
            vec![Literal::negative(video), Literal::positive(rec_park)],
        ],
    );
    let _ = kb.add_constraint(
        "(biz-park /\\ !rec-park -> sensor) /\\ !(rec-park /\\ sensor)",
        vec![
            vec![
                Literal::negative(biz_park),
                Literal::positive(rec_park),
                Literal::positive(sensor),
            ],
            vec![Literal::negative(rec_park), Literal::negative(sensor)],
        ],
    );
    let _ = kb.add_constraint(
        "(video or sensor) <-> easy-parking",
        vec![
            vec![Literal::negative(video), Literal::positive(easy_parking)],
            vec![Literal::negative(sensor), Literal::positive(easy_parking)],
            vec![
                Literal::negative(easy_parking),
                Literal::positive(video),
                Literal::positive(sensor),
            ],
        ],
    );
    let _ = kb.add_constraint(
        "biz-park <-> GSM-radio",
        vec![
            vec![Literal::negative(biz_park), Literal::positive(gsm_radio)],
            vec![Literal::negative(gsm_radio), Literal::positive(biz_park)],
        ],
    );
    let _ = kb.add_constraint(
        "GSM-radio <-> free-com",
        vec![
            vec![Literal::negative(gsm_radio), Literal::positive(free_com)],
            vec![Literal::negative(free_com), Literal::positive(gsm_radio)],
        ],
    );

    Ok(kb)
}
