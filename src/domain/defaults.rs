// src/domain/defaults.rs

use crate::domain::bid::{BidRecord, BidStatus};
use chrono::Utc;

/// The collection the radar shows before (or instead of) a remote load.
pub fn default_bids() -> Vec<BidRecord> {
    let now = Utc::now().to_rfc3339();

    let entry = |id: &str,
                 title: &str,
                 agency: &str,
                 category: &str,
                 region: &str,
                 budget: u64,
                 deadline: &str,
                 status: BidStatus| BidRecord {
        id: id.to_string(),
        title: title.to_string(),
        agency: agency.to_string(),
        category: category.to_string(),
        region: region.to_string(),
        budget,
        deadline: deadline.to_string(),
        created_at: now.clone(),
        status,
        updated_at: None,
        description: None,
        bid_method: None,
        estimated_price: None,
        announcement_date: None,
    };

    vec![
        entry(
            "1",
            "2024년 스마트시티 통합플랫폼 구축사업",
            "서울특별시청",
            "소프트웨어",
            "서울",
            500_000_000,
            "2024-12-31T23:59:59",
            BidStatus::Active,
        ),
        entry(
            "2",
            "공공데이터 개방 시스템 고도화",
            "경기도청",
            "소프트웨어",
            "경기",
            300_000_000,
            "2024-12-25T18:00:00",
            BidStatus::Active,
        ),
        entry(
            "3",
            "청사 리모델링 공사",
            "인천광역시청",
            "건설",
            "인천",
            1_200_000_000,
            "2024-12-28T17:00:00",
            BidStatus::Modified,
        ),
        entry(
            "4",
            "AI 기반 교통관제 시스템 구축",
            "부산광역시청",
            "소프트웨어",
            "부산",
            800_000_000,
            "2025-01-10T18:00:00",
            BidStatus::Active,
        ),
        entry(
            "5",
            "친환경 에너지 설비 구축",
            "대전광역시청",
            "건설",
            "대전",
            2_000_000_000,
            "2025-01-15T17:00:00",
            BidStatus::Active,
        ),
    ]
}

/// Category choices offered by the radar filter form.
pub const CATEGORIES: [&str; 5] = ["건설", "용역", "물품", "소프트웨어", "기타"];

pub const REGIONS: [&str; 17] = [
    "서울", "경기", "인천", "부산", "대구", "광주", "대전", "울산", "세종", "강원", "충북", "충남",
    "전북", "전남", "경북", "경남", "제주",
];
