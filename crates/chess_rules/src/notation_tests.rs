use super::*;

#[test]
fn test_square_parse() {
    let e4: Square = "e4".parse().unwrap();
    assert_eq!((e4.row(), e4.col()), (3, 4));
    let h8: Square = "h8".parse().unwrap();
    assert_eq!((h8.row(), h8.col()), (7, 7));
    assert_eq!(h8.to_string(), "h8");

    for bad in ["", "e", "i1", "a9", "a0", "E4", "e44"] {
        assert_eq!(
            bad.parse::<Square>(),
            Err(InputError::BadSquare(bad.to_string())),
            "{bad:?}"
        );
    }
}

#[test]
fn test_move_input() {
    let mv: MoveInput = "e2 e4".parse().unwrap();
    assert_eq!(mv.from.to_string(), "e2");
    assert_eq!(mv.to.to_string(), "e4");
    assert_eq!(mv.promotion, None);

    let promo: MoveInput = "  a7   a8\tQUEEN ".parse().unwrap();
    assert_eq!(promo.promotion, Some(PieceKind::Queen));
}

#[test]
fn test_move_input_rejections() {
    assert_eq!(
        "e2".parse::<MoveInput>(),
        Err(InputError::TokenCount(1))
    );
    assert_eq!(
        "a7 a8 QUEEN now".parse::<MoveInput>(),
        Err(InputError::TokenCount(4))
    );
    assert_eq!(
        "e2 z4".parse::<MoveInput>(),
        Err(InputError::BadSquare("z4".to_string()))
    );
    // Tokens are case sensitive
    assert_eq!(
        "a7 a8 queen".parse::<MoveInput>(),
        Err(InputError::BadPromotion("queen".to_string()))
    );
    assert_eq!(
        "a7 a8 KING".parse::<MoveInput>(),
        Err(InputError::BadPromotion("KING".to_string()))
    );
}

#[test]
fn test_parse_promotion() {
    for kind in PieceKind::PROMOTIONS {
        assert_eq!(parse_promotion(kind.name()), Ok(kind));
    }
    assert!(parse_promotion("PAWN").is_err());
}
