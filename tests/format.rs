use ratshape::{classify, describe, pretty};

fn pretty_of(input: &str) -> String {
    pretty(&classify(input).expect("classify expression"))
}

#[test]
fn renders_rational_shapes_compactly() {
    assert_eq!(pretty_of("7 / (-x - 2)"), "7/(-x-2)");
    assert_eq!(pretty_of("12/((3z+1)^3)"), "12/((3z+1)^3)");
    assert_eq!(pretty_of("(y + 5)/(y^2 - 6y + 9)"), "(y+5)/(y^2-6y+9)");
    assert_eq!(pretty_of("(-x+5)/((x^2+x-1)^2)"), "(-x+5)/((x^2+x-1)^2)");
}

#[test]
fn renders_polynomials_by_descending_degree() {
    assert_eq!(pretty_of("x - 7 + 4x^3 - 2x^2"), "4x^3-2x^2+x-7");
    assert_eq!(pretty_of("2x + 3x - 5"), "5x-5");
    assert_eq!(pretty_of("2.5x^2 - .5"), "2.5x^2-0.5");
    assert_eq!(pretty_of("x - x"), "0");
    assert_eq!(pretty_of("7"), "7");
}

#[test]
fn rendered_text_classifies_to_the_same_shape() {
    for input in [
        "4x^3 - 2x^2 + x - 7",
        "-x^2 + 3x - 0.125",
        "8/((-x+3)^4)",
        "-5/(y+4)",
        "(10y+5)/(y^2-6y+9)",
        "(2y+8)/((y^2-3y+1)^5)",
    ] {
        let shape = classify(input).expect("classify expression");
        let again = classify(&pretty(&shape)).expect("classify rendered text");
        assert_eq!(shape, again, "round trip of {input}");
    }
}

#[test]
fn describes_extracted_parameters() {
    let describe_of = |input: &str| describe(&classify(input).expect("classify expression"));
    assert_eq!(describe_of("7/(-x-2)"), "I: A=7, k=-1, a=-2, variable=x");
    assert_eq!(
        describe_of("-9/((x-7)^2)"),
        "II: A=-9, k=1, a=-7, n=2, variable=x"
    );
    assert_eq!(
        describe_of("(5x+1)/(x^2-4x+4)"),
        "III: M=5, N=1, p=-4, q=4, variable=x"
    );
    assert_eq!(
        describe_of("(3x-4)/((x^2+2x+1)^3)"),
        "IV: M=3, N=-4, p=2, q=1, n=3, variable=x"
    );
    assert_eq!(
        describe_of("-x^2+3x-5"),
        "polynomial: {2: -1, 1: 3, 0: -5}, variable=x (-x^2+3x-5)"
    );
    assert_eq!(
        describe_of("7"),
        "polynomial: {0: 7}, variable=none (7)"
    );
}
