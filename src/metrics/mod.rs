//! 지표 제공자 - 완료된 지난달 KPI 조회

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, TimeZone, Utc};

use crate::types::{Indicators, Kpis};

/// 한국 표준시 (+09:00)
pub fn kst() -> FixedOffset {
    FixedOffset::east_opt(9 * 3600).unwrap()
}

/// 기준 시각이 속한 달의 직전 달 범위를 KST로 계산
///
/// 시작은 1일 00:00:00, 끝은 말일 23:59:59.
pub fn prev_month_range(
    ref_dt: Option<DateTime<FixedOffset>>,
) -> (DateTime<FixedOffset>, DateTime<FixedOffset>) {
    let tz = kst();
    let ref_dt = ref_dt.unwrap_or_else(|| Utc::now().with_timezone(&tz));

    let (year, month) = if ref_dt.month() == 1 {
        (ref_dt.year() - 1, 12)
    } else {
        (ref_dt.year(), ref_dt.month() - 1)
    };

    let start_date = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
    let last_day = days_in_month(year, month);
    let end_date = NaiveDate::from_ymd_opt(year, month, last_day).unwrap();

    let start = tz
        .from_local_datetime(&start_date.and_hms_opt(0, 0, 0).unwrap())
        .unwrap();
    let end = tz
        .from_local_datetime(&end_date.and_hms_opt(23, 59, 59).unwrap())
        .unwrap();
    (start, end)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next.unwrap()
        .signed_duration_since(NaiveDate::from_ymd_opt(year, month, 1).unwrap())
        .num_days() as u32
}

/// 샘플 지표 (목데이터)
pub fn sample_indicators() -> Indicators {
    Indicators {
        month: "샘플".to_string(),
        kpis: Kpis {
            visits: Some(1480),
            new_customers: Some(210),
            revisit_rate: Some(0.35),
            coupon_use_rate: Some(0.18),
            challenge_join: Some(96),
        },
    }
}

/// 지난달(완료월) 지표 조회
///
/// TODO: 분석 웨어하우스 질의로 교체. 현재는 기간 라벨만 실제 값으로 채운 샘플을 돌려준다.
pub fn get_monthly_indicators(_cafe_id: u32, ref_dt: Option<DateTime<FixedOffset>>) -> Indicators {
    let (start, _end) = prev_month_range(ref_dt);
    Indicators {
        month: start.format("%Y-%m").to_string(),
        ..sample_indicators()
    }
}
