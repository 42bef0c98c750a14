//! 지표(KPI) 타입과 텍스트 표기 규칙

use serde::{Deserialize, Serialize};

/// 완료된 보고 기간의 KPI 값 묶음
///
/// 수치 검증은 하지 않는다. 없는 값은 텍스트 변환 시 "N/A" 또는 0으로 표기된다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kpis {
    /// 방문 수
    pub visits: Option<i64>,

    /// 신규 고객 수
    pub new_customers: Option<i64>,

    /// 재방문율 (0..1)
    pub revisit_rate: Option<f64>,

    /// 쿠폰 사용률 (0..1, 선택)
    pub coupon_use_rate: Option<f64>,

    /// 챌린지 참여 수 (선택)
    pub challenge_join: Option<i64>,
}

/// 월간 지표 레코드
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Indicators {
    /// 기간 라벨 (예: "2025-07")
    pub month: String,

    /// KPI 값
    pub kpis: Kpis,
}

/// 정수 KPI 표기. 값이 없으면 리터럴 "N/A".
pub fn fmt_count(value: Option<i64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "N/A".to_string(),
    }
}

/// 비율 KPI 표기. 0.35 -> "35.0%", 값이 없으면 "0.0%".
pub fn fmt_rate(value: Option<f64>) -> String {
    format!("{:.1}%", value.unwrap_or(0.0) * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_count() {
        assert_eq!(fmt_count(Some(1480)), "1480");
        assert_eq!(fmt_count(None), "N/A");
    }

    #[test]
    fn test_fmt_rate() {
        assert_eq!(fmt_rate(Some(0.35)), "35.0%");
        assert_eq!(fmt_rate(Some(0.184)), "18.4%");
        assert_eq!(fmt_rate(None), "0.0%");
    }

    #[test]
    fn test_kpis_wire_names() {
        let json = r#"{"visits":1480,"newCustomers":210,"revisitRate":0.35}"#;
        let kpis: Kpis = serde_json::from_str(json).unwrap();
        assert_eq!(kpis.visits, Some(1480));
        assert_eq!(kpis.new_customers, Some(210));
        assert_eq!(kpis.revisit_rate, Some(0.35));
        assert!(kpis.coupon_use_rate.is_none());
        assert!(kpis.challenge_join.is_none());
    }
}
