//! 트렌드 수집용 프롬프트

/// 인기 메뉴 트렌드 질의 프롬프트
pub fn menu_trend_prompt() -> String {
    r#"최근 한 달간 한국에서 인기를 끌고 있는 카페 메뉴 3가지를 조사해주세요.

아래 형식의 JSON 배열로만 답변하세요. 다른 설명은 붙이지 마세요.
[
  {
    "menu": "메뉴 이름",
    "whyPopular": "인기 이유 (한 문장)",
    "description": "간단한 설명",
    "exampleCafe": "해당 메뉴로 알려진 카페 이름"
  }
]

모든 텍스트는 한국어로 작성하세요."#
        .to_string()
}

/// 인기 카페 특징 질의 프롬프트
pub fn cafe_feature_prompt() -> String {
    r#"최근 한국에서 손님이 많은 카페들이 공통적으로 갖춘 특징 3가지를 조사해주세요.

아래 형식의 JSON 배열로만 답변하세요. 다른 설명은 붙이지 마세요.
[
  {
    "feature": "특징 이름",
    "whyEffective": "효과적인 이유 (한 문장)",
    "description": "간단한 설명",
    "exampleCafe": "해당 특징으로 알려진 카페 이름"
  }
]

모든 텍스트는 한국어로 작성하세요."#
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompts_request_expected_keys() {
        let menu = menu_trend_prompt();
        assert!(menu.contains("\"menu\""));
        assert!(menu.contains("\"whyPopular\""));
        assert!(menu.contains("\"exampleCafe\""));

        let feature = cafe_feature_prompt();
        assert!(feature.contains("\"feature\""));
        assert!(feature.contains("\"whyEffective\""));
        assert!(feature.contains("\"exampleCafe\""));
    }
}
