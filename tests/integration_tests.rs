//! 통합 테스트 - 한글 로마자 변환

use hangul_romanize::{cleanup_hyphens, romanize, Romanizer, RomanizerConfig, SurnameTable};

#[test]
fn test_empty_input() {
    assert_eq!(romanize(""), "");
    assert_eq!(romanize(None), "");
}

#[test]
fn test_plain_text_unchanged() {
    assert_eq!(romanize("Hello, World!"), "Hello, World!");
    assert_eq!(romanize("abc 123 ?"), "abc 123 ?");
}

#[test]
fn test_single_syllables() {
    assert_eq!(romanize("가"), "ga");
    assert_eq!(romanize("아"), "a"); // 초성 ㅇ은 소리 없음
    assert_eq!(romanize("닭"), "dalg");
    assert_eq!(romanize("꽃"), "kkoch");
}

#[test]
fn test_words() {
    assert_eq!(romanize("한글"), "han-geul");
    assert_eq!(romanize("서울"), "seo-ul");
    assert_eq!(romanize("대한민국"), "dae-han-min-guk");
}

#[test]
fn test_family_names() {
    assert_eq!(romanize("김철수"), "kim-cheol-su");
    assert_eq!(romanize("박지성"), "park-ji-seong");
    assert_eq!(romanize("윤동주"), "yoon-dong-ju");
    assert_eq!(romanize("김"), "kim");
}

#[test]
fn test_mixed_sentence() {
    assert_eq!(
        romanize("안녕하세요, 김철수 씨!"),
        "an-nyeong-ha-se-yo, kim-cheol-su ssi!"
    );
    assert_eq!(romanize("서울 2024"), "seo-ul 2024");
    assert_eq!(romanize("한글abc"), "han-geulabc");
}

#[test]
fn test_whitespace_preserved() {
    assert_eq!(romanize("김\t철수\n"), "kim\tcheol-su\n");
    assert_eq!(romanize("  가  "), "  ga  ");
}

#[test]
fn test_output_hyphen_invariants() {
    let inputs = [
        "김철수",
        "이 이 이",
        "김-이",
        "가--나",
        "장 - 조",
        "박,최;강.정",
        "임\u{3000}윤",
        "아이-",
        "-",
    ];
    for input in inputs {
        let out = romanize(input);
        assert!(!out.contains("--"), "{:?} -> {:?}", input, out);
        assert!(!out.ends_with('-'), "{:?} -> {:?}", input, out);
        assert!(
            !out.chars()
                .zip(out.chars().skip(1))
                .any(|(a, b)| a == '-' && b.is_whitespace()),
            "{:?} -> {:?}",
            input,
            out
        );
        assert_eq!(cleanup_hyphens(&out), out);
    }
}

#[test]
fn test_output_hyphen_invariants_exhaustive() {
    const ALPHABET: [char; 7] = ['-', ' ', '\t', 'a', '1', '김', '가'];

    // 길이 5 이하의 모든 입력
    let mut frontier = vec![String::new()];
    for depth in 0..=5 {
        let mut next = Vec::new();
        for input in &frontier {
            let out = romanize(input.as_str());
            assert!(!out.contains("--"), "{:?} -> {:?}", input, out);
            assert!(!out.ends_with('-'), "{:?} -> {:?}", input, out);
            assert!(!out.contains("- ") && !out.contains("-\t"), "{:?} -> {:?}", input, out);
            assert_eq!(cleanup_hyphens(&out), out, "{:?}", input);
            if depth < 5 {
                next.extend(ALPHABET.iter().map(|&c| format!("{}{}", input, c)));
            }
        }
        frontier = next;
    }
}

#[test]
fn test_custom_surnames() {
    let mut surnames = SurnameTable::default();
    surnames.insert('이', "yi");
    let romanizer = Romanizer::with_surnames(surnames);
    assert_eq!(romanizer.romanize("이순신"), "yi-sun-sin");
    assert_eq!(romanizer.romanize("김구"), "kim-gu");

    let config = RomanizerConfig {
        use_family_names: false,
        ..RomanizerConfig::default()
    };
    let plain = Romanizer::from_config(&config).unwrap();
    assert_eq!(plain.romanize("김"), "gim");
    assert_eq!(plain.romanize("이순신"), "i-sun-sin");
}

#[test]
fn test_shared_across_threads() {
    let romanizer = std::sync::Arc::new(Romanizer::new());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let r = std::sync::Arc::clone(&romanizer);
            std::thread::spawn(move || r.romanize("김철수"))
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), "kim-cheol-su");
    }
}
