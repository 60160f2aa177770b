//! Reference data shipped with the application.
//!
//! The catalog grew in steps: the first release carried a single advanced
//! term ([`LEGACY_ADVANCED_TERM`]) and overseas stocks only. The subsets
//! exposed here are what the reconciler backfills into installations that
//! started from those earlier snapshots.

use crate::{
    Region, CATEGORY_ADVANCED, CATEGORY_BASIC, RISK_HIGH, RISK_LOW, RISK_MEDIUM,
};

/// The one advanced term present in the earliest catalog snapshot.
pub const LEGACY_ADVANCED_TERM: &str = "PER";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaselineTerm {
    pub term: &'static str,
    pub category: &'static str,
    pub simple_explanation: &'static str,
    pub detailed_explanation: Option<&'static str>,
    pub example: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaselineStock {
    pub code: &'static str,
    pub name: &'static str,
    pub sector: &'static str,
    pub description: &'static str,
    pub recommendation_reason: &'static str,
    pub risk_level: &'static str,
    pub region: Region,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaselineFaq {
    pub question: &'static str,
    pub answer: &'static str,
    pub category: &'static str,
}

const fn term(
    term: &'static str,
    category: &'static str,
    simple_explanation: &'static str,
    detailed_explanation: &'static str,
    example: &'static str,
) -> BaselineTerm {
    BaselineTerm {
        term,
        category,
        simple_explanation,
        detailed_explanation: Some(detailed_explanation),
        example: Some(example),
    }
}

const fn stock(
    code: &'static str,
    name: &'static str,
    sector: &'static str,
    description: &'static str,
    recommendation_reason: &'static str,
    risk_level: &'static str,
    region: Region,
) -> BaselineStock {
    BaselineStock {
        code,
        name,
        sector,
        description,
        recommendation_reason,
        risk_level,
        region,
    }
}

static TERMS: [BaselineTerm; 21] = [
    term(
        "PER",
        CATEGORY_ADVANCED,
        "주가를 주당 순이익으로 나눈 값으로, 주식이 얼마나 비싼지 보는 지표예요.",
        "PER(Price Earnings Ratio)는 주가수익비율로, 회사의 수익성 대비 주가가 적정한지 판단하는 가장 널리 사용되는 지표입니다.",
        "A회사 주가가 10,000원이고 주당 순이익이 1,000원이면 PER은 10입니다.",
    ),
    term(
        "배당",
        CATEGORY_BASIC,
        "회사가 번 돈의 일부를 주주들에게 나눠주는 거예요.",
        "배당은 기업이 이익의 일부를 주주들에게 현금이나 주식의 형태로 지급하는 것을 말합니다.",
        "B회사가 주당 500원의 배당을 주고, 주가가 10,000원이면 배당률은 5%입니다.",
    ),
    term(
        "시가총액",
        CATEGORY_BASIC,
        "회사의 전체 주식 가치를 나타내는 거예요.",
        "시가총액은 상장 주식 수에 현재 주가를 곱한 값으로, 해당 기업의 시장에서의 총 가치를 나타냅니다.",
        "C회사의 발행 주식 수가 1억 주이고 주가가 20,000원이면 시가총액은 2조 원입니다.",
    ),
    term(
        "주식",
        CATEGORY_BASIC,
        "회사의 일부를 소유한다는 증서예요. 주식을 사면 그 회사의 주주가 됩니다.",
        "주식은 기업의 자본을 구성하는 단위로, 주식을 보유한 사람을 주주라고 합니다.",
        "D회사의 주식을 100주 샀다면, 그 회사의 일부를 소유하게 된 거예요.",
    ),
    term(
        "주가",
        CATEGORY_BASIC,
        "주식 한 주의 가격이에요. 시장에서 거래되는 실제 가격입니다.",
        "주가는 주식 시장에서 실제로 거래되는 주식의 가격을 말합니다.",
        "E회사의 주가가 50,000원이면, 그 회사의 주식 한 주를 사려면 50,000원이 필요해요.",
    ),
    term(
        "상장",
        CATEGORY_BASIC,
        "회사가 주식시장에 등록되어 주식을 거래할 수 있게 되는 거예요.",
        "상장은 기업이 주식시장(거래소)에 등록되어 일반 투자자들이 그 회사의 주식을 사고팔 수 있게 되는 것을 의미합니다.",
        "F회사가 코스피에 상장했다면, 이제 누구나 그 회사의 주식을 살 수 있어요.",
    ),
    term(
        "매수",
        CATEGORY_BASIC,
        "주식을 사는 거예요.",
        "매수는 주식을 구매하는 행위를 말합니다.",
        "G회사 주식을 10주 매수했다면, 그 회사의 주식을 10주 샀다는 뜻이에요.",
    ),
    term(
        "매도",
        CATEGORY_BASIC,
        "주식을 파는 거예요.",
        "매도는 보유하고 있는 주식을 판매하는 행위를 말합니다.",
        "H회사 주식을 10,000원에 샀다가 15,000원에 매도하면 5,000원의 수익을 얻을 수 있어요.",
    ),
    term(
        "수익률",
        CATEGORY_BASIC,
        "투자한 돈 대비 얼마나 벌었는지 보여주는 비율이에요.",
        "수익률은 투자 원금 대비 얻은 수익의 비율을 나타냅니다.",
        "100만원을 투자해서 10만원을 벌었다면 수익률은 10%예요.",
    ),
    term(
        "손실",
        CATEGORY_BASIC,
        "투자한 돈보다 적게 받아서 잃은 금액이에요.",
        "손실은 투자 원금보다 낮은 가격에 매도하거나 주가가 하락하여 발생하는 금액을 말합니다.",
        "100만원에 산 주식을 80만원에 팔았다면 20만원의 손실이 발생한 거예요.",
    ),
    term(
        "포트폴리오",
        CATEGORY_BASIC,
        "내가 가지고 있는 주식들의 모음이에요.",
        "포트폴리오는 투자자가 보유하고 있는 모든 주식과 투자 자산의 조합을 의미합니다.",
        "I회사 주식 10주, J회사 주식 5주, K회사 주식 20주를 가지고 있다면 이것이 내 포트폴리오예요.",
    ),
    term(
        "분산투자",
        CATEGORY_BASIC,
        "여러 종목에 나눠서 투자하는 거예요. 한 곳에만 투자하면 위험하니까요.",
        "분산투자는 여러 종목이나 업종에 투자하여 리스크를 분산시키는 투자 전략입니다.",
        "100만원을 L회사에만 투자하는 것보다 세 회사에 나눠 투자하는 게 더 안전해요.",
    ),
    term(
        "PBR",
        CATEGORY_ADVANCED,
        "주가를 주당 순자산으로 나눈 값으로, 회사의 자산 대비 주가가 적정한지 보는 지표예요.",
        "PBR(Price to Book Ratio)는 주가순자산비율로, 회사의 장부가치 대비 주가가 얼마나 높은지 나타냅니다.",
        "O회사 주가가 5,000원이고 주당 순자산이 10,000원이면 PBR은 0.5입니다.",
    ),
    term(
        "ROE",
        CATEGORY_ADVANCED,
        "자기자본으로 얼마나 이익을 냈는지 보여주는 수익성 지표예요.",
        "ROE(Return on Equity)는 자기자본이익률로, 당기순이익을 자기자본으로 나눈 값입니다.",
        "P회사가 자기자본 100억원으로 20억원의 순이익을 냈다면 ROE는 20%입니다.",
    ),
    term(
        "EPS",
        CATEGORY_ADVANCED,
        "발행된 주식 한 주당 얼마의 순이익이 발생했는지 보여주는 지표예요.",
        "EPS(Earnings Per Share)는 주당순이익으로, 당기순이익을 발행주식수로 나눈 값입니다.",
        "Q회사가 100억원의 순이익을 냈고 발행주식수가 1,000만 주라면 EPS는 1,000원입니다.",
    ),
    term(
        "베타",
        CATEGORY_ADVANCED,
        "시장 대비 주식의 변동성을 나타내는 위험 지표예요.",
        "베타(Beta)는 특정 주식의 가격 변동성이 전체 시장 대비 얼마나 큰지를 나타내는 지표입니다.",
        "R회사 주식의 베타가 1.5라면, 시장이 10% 오를 때 이 주식은 평균적으로 15% 오릅니다.",
    ),
    term(
        "PEG",
        CATEGORY_ADVANCED,
        "PER을 성장률로 나눈 값으로, 성장성을 고려한 주가 평가 지표예요.",
        "PEG(Price Earnings to Growth)는 PER을 연평균 성장률로 나눈 값입니다.",
        "S회사의 PER이 20이고 연평균 성장률이 30%라면 PEG는 약 0.67입니다.",
    ),
    term(
        "EV/EBITDA",
        CATEGORY_ADVANCED,
        "기업가치를 EBITDA로 나눈 값으로, 업종 간 비교에 유용한 밸류에이션 지표예요.",
        "EV/EBITDA는 기업가치(Enterprise Value)를 이자, 세금, 감가상각 전 이익으로 나눈 값입니다.",
        "T회사의 기업가치가 1,000억원이고 EBITDA가 100억원이면 EV/EBITDA는 10입니다.",
    ),
    term(
        "듀폰 분석",
        CATEGORY_ADVANCED,
        "ROE를 여러 요소로 분해하여 회사의 수익성 원인을 분석하는 방법이에요.",
        "듀폰 분석(DuPont Analysis)은 ROE를 매출이익률, 자산회전율, 자기자본비율로 분해하는 방법입니다.",
        "U회사의 ROE 20%는 매출이익률 10%, 자산회전율 1.5회, 자기자본비율 1.33의 곱입니다.",
    ),
    term(
        "현금흐름표",
        CATEGORY_ADVANCED,
        "회사의 현금 유입과 유출을 보여주는 재무제표예요.",
        "현금흐름표(Cash Flow Statement)는 일정 기간 동안 회사의 현금이 어떻게 들어오고 나갔는지를 보여주는 재무제표입니다.",
        "V회사가 영업활동에서 50억원을 벌었지만 투자활동에서 100억원을 썼다면 자금 조달이 필요할 수 있어요.",
    ),
    term(
        "밸류에이션",
        CATEGORY_ADVANCED,
        "회사의 내재가치를 계산하여 주가가 적정한지 평가하는 방법이에요.",
        "밸류에이션(Valuation)은 회사의 내재가치를 산정하여 현재 주가가 적정한지 평가하는 과정입니다.",
        "W회사의 내재가치가 주당 15,000원인데 현재 주가가 10,000원이라면 저평가된 것으로 볼 수 있어요.",
    ),
];

static STOCKS: [BaselineStock; 35] = [
    stock(
        "AAPL",
        "Apple Inc.",
        "Technology",
        "Apple은 세계 최대 시가총액을 가진 기술 기업으로, 혁신적인 제품과 서비스로 전 세계 소비자들의 사랑을 받고 있습니다.",
        "Apple은 안정적인 대형주로 초보 투자자에게 매우 적합한 종목입니다.",
        RISK_LOW,
        Region::Overseas,
    ),
    stock(
        "MSFT",
        "Microsoft Corporation",
        "Technology",
        "Microsoft는 세계적인 소프트웨어 및 클라우드 기업으로, Windows, Office, Azure 등 다양한 제품과 서비스를 제공하고 있습니다.",
        "Microsoft는 클라우드 사업의 지속적인 성장과 안정적인 수익 구조로 장기 투자에 매우 적합한 종목입니다.",
        RISK_LOW,
        Region::Overseas,
    ),
    stock(
        "GOOGL",
        "Alphabet Inc.",
        "Technology",
        "Alphabet은 구글의 모회사로, 검색 엔진, 디지털 광고, 클라우드, 유튜브 등 다양한 디지털 서비스를 제공하는 글로벌 기술 기업입니다.",
        "Alphabet은 디지털 광고 시장의 강자로 안정적인 수익을 보이며, AI와 클라우드 사업의 성장 가능성이 높습니다.",
        RISK_LOW,
        Region::Overseas,
    ),
    stock(
        "AMZN",
        "Amazon.com Inc.",
        "E-commerce/Cloud",
        "Amazon은 세계 최대 전자상거래 기업이자 클라우드 서비스(AWS) 제공업체로, 다양한 사업을 운영하고 있습니다.",
        "Amazon은 전자상거래와 클라우드 사업의 성장으로 장기 투자 가치가 높은 종목입니다.",
        RISK_MEDIUM,
        Region::Overseas,
    ),
    stock(
        "NVDA",
        "NVIDIA Corporation",
        "Technology",
        "NVIDIA는 AI 반도체와 그래픽 칩의 선도 기업으로, 데이터센터, 게이밍, 자율주행 등 다양한 분야에서 강세를 보이고 있습니다.",
        "NVIDIA는 AI 시대의 핵심 기업으로 성장 가능성이 매우 높습니다.",
        RISK_HIGH,
        Region::Overseas,
    ),
    stock(
        "TSLA",
        "Tesla Inc.",
        "Automotive/Energy",
        "Tesla는 전기차 제조 및 에너지 솔루션 기업으로, 전기차 시장을 선도하고 있습니다.",
        "Tesla는 전기차 시장의 성장과 혁신적인 기술력으로 높은 성장 가능성을 보이지만, 경쟁 심화와 경영진 관련 변동성에 주의가 필요합니다.",
        RISK_HIGH,
        Region::Overseas,
    ),
    stock(
        "META",
        "Meta Platforms Inc.",
        "Technology",
        "Meta는 페이스북, 인스타그램, 왓츠앱을 운영하는 소셜 미디어 플랫폼 기업으로, 전 세계 수십억 명의 사용자를 보유하고 있습니다.",
        "Meta는 소셜 미디어 광고 시장의 강자로 안정적인 수익을 보이며, 메타버스 사업의 장기 성장 가능성이 있습니다.",
        RISK_MEDIUM,
        Region::Overseas,
    ),
    stock(
        "JPM",
        "JPMorgan Chase & Co.",
        "Financial Services",
        "JPMorgan Chase는 미국 최대 은행 중 하나로, 상업은행, 투자은행, 자산관리 등 다양한 금융 서비스를 제공하고 있습니다.",
        "JPMorgan Chase는 안정적인 수익 구조와 강력한 자본력을 가진 금융 대형주로 배당도 꾸준히 지급합니다.",
        RISK_LOW,
        Region::Overseas,
    ),
    stock(
        "V",
        "Visa Inc.",
        "Financial Services",
        "Visa는 세계 최대 결제 네트워크 기업으로, 전 세계 신용카드 및 직불카드 거래를 처리하고 있습니다.",
        "Visa는 디지털 결제 시장의 성장과 안정적인 수익 모델로 장기 투자에 적합한 종목입니다.",
        RISK_LOW,
        Region::Overseas,
    ),
    stock(
        "JNJ",
        "Johnson & Johnson",
        "Healthcare",
        "Johnson & Johnson은 의약품, 의료기기, 소비자 건강 제품을 생산하는 글로벌 헬스케어 기업입니다.",
        "Johnson & Johnson은 안정적인 수익과 꾸준한 배당으로 방어적 투자에 적합한 종목입니다.",
        RISK_LOW,
        Region::Overseas,
    ),
    stock(
        "WMT",
        "Walmart Inc.",
        "Retail",
        "Walmart는 세계 최대 유통 기업으로, 온라인과 오프라인 매장을 운영하며 일상용품을 판매하고 있습니다.",
        "Walmart는 안정적인 수익 구조와 꾸준한 성장으로 방어적 투자에 적합한 종목입니다.",
        RISK_LOW,
        Region::Overseas,
    ),
    stock(
        "PG",
        "Procter & Gamble Co.",
        "Consumer Goods",
        "Procter & Gamble은 세계적인 소비재 기업으로, 생활용품, 화장품, 건강용품 등을 생산하고 있습니다.",
        "Procter & Gamble은 안정적인 수익과 꾸준한 배당으로 방어적 투자에 적합한 종목입니다.",
        RISK_LOW,
        Region::Overseas,
    ),
    stock(
        "MA",
        "Mastercard Inc.",
        "Financial Services",
        "Mastercard는 세계 2위 결제 네트워크 기업으로, 전 세계 신용카드 및 직불카드 거래를 처리하고 있습니다.",
        "Mastercard는 디지털 결제 시장의 성장과 안정적인 수익 모델로 장기 투자에 적합합니다.",
        RISK_LOW,
        Region::Overseas,
    ),
    stock(
        "UNH",
        "UnitedHealth Group Inc.",
        "Healthcare",
        "UnitedHealth Group은 미국 최대 건강보험 회사로, 건강보험, 의료 서비스, 제약 혜택 관리 등을 제공하고 있습니다.",
        "UnitedHealth Group은 고령화와 헬스케어 수요 증가로 장기 성장 가능성이 높은 종목입니다.",
        RISK_MEDIUM,
        Region::Overseas,
    ),
    stock(
        "HD",
        "The Home Depot Inc.",
        "Retail",
        "The Home Depot은 세계 최대 주택 개선 소매업체로, 건축 자재, 도구, 가전제품 등을 판매하고 있습니다.",
        "The Home Depot은 주택 시장과 연관성이 높아 경제 상황에 따라 변동하지만, 안정적인 수익 구조를 가지고 있습니다.",
        RISK_MEDIUM,
        Region::Overseas,
    ),
    stock(
        "DIS",
        "The Walt Disney Company",
        "Entertainment",
        "The Walt Disney Company는 세계적인 엔터테인먼트 기업으로, 영화, 테마파크, 스트리밍 서비스(Disney+)를 운영하고 있습니다.",
        "Disney는 강력한 브랜드와 콘텐츠 포트폴리오로 장기 성장 가능성이 있지만, 스트리밍 경쟁과 테마파크 수익 변동성에 주의가 필요합니다.",
        RISK_MEDIUM,
        Region::Overseas,
    ),
    stock(
        "NFLX",
        "Netflix Inc.",
        "Entertainment",
        "Netflix는 세계 최대 스트리밍 서비스 제공업체로, 영화, 드라마, 다큐멘터리 등을 제공하고 있습니다.",
        "Netflix는 글로벌 스트리밍 시장의 성장과 함께 성장 가능성이 높지만, 경쟁이 치열하고 구독자 증가율 둔화로 변동성이 큽니다.",
        RISK_HIGH,
        Region::Overseas,
    ),
    stock(
        "AMD",
        "Advanced Micro Devices",
        "Technology",
        "AMD는 반도체 기업으로 CPU와 GPU를 생산하며, AI와 데이터센터 시장에서 성장하고 있습니다.",
        "AMD는 AI와 데이터센터 시장의 성장으로 높은 성장 가능성을 보이지만, 반도체 업황 변동성과 경쟁 심화에 주의가 필요합니다.",
        RISK_HIGH,
        Region::Overseas,
    ),
    stock(
        "INTC",
        "Intel Corporation",
        "Technology",
        "Intel은 세계 최대 반도체 기업 중 하나로, CPU를 주로 생산하며 데이터센터 사업도 운영하고 있습니다.",
        "Intel은 안정적인 수익 구조를 가지고 있지만, 경쟁이 치열하고 제조 공정 지연으로 변동성이 있습니다.",
        RISK_MEDIUM,
        Region::Overseas,
    ),
    stock(
        "COST",
        "Costco Wholesale Corporation",
        "Retail",
        "Costco는 대형 할인매장을 운영하는 유통 기업으로, 회원제 운영 모델을 통해 안정적인 수익을 창출하고 있습니다.",
        "안정적인 수익 구조와 꾸준한 성장으로 방어적 투자에 적합한 종목입니다.",
        RISK_LOW,
        Region::Overseas,
    ),
    stock(
        "005930",
        "삼성전자",
        "반도체/전자",
        "삼성전자는 세계 최대의 반도체 및 스마트폰 제조 기업으로, 메모리 반도체 시장에서 압도적인 점유율을 보유하고 있습니다.",
        "삼성전자는 한국 대표 대형주로 안정적인 투자처입니다.",
        RISK_MEDIUM,
        Region::Domestic,
    ),
    stock(
        "000660",
        "SK하이닉스",
        "반도체",
        "SK하이닉스는 세계 2위의 메모리 반도체 기업으로, D램과 낸드플래시를 생산하고 있습니다.",
        "SK하이닉스는 AI 시대의 핵심 기업으로 성장 가능성이 매우 높습니다.",
        RISK_HIGH,
        Region::Domestic,
    ),
    stock(
        "005380",
        "현대차",
        "자동차",
        "현대자동차는 한국 최대의 자동차 제조 기업으로, 전 세계 시장에서 경쟁력을 보유하고 있습니다.",
        "현대차는 전기차 전환 시대에 적극 대응하고 있어 장기 성장 가능성이 있습니다.",
        RISK_MEDIUM,
        Region::Domestic,
    ),
    stock(
        "066570",
        "LG전자",
        "전자",
        "LG전자는 가전, TV, 모바일 등 다양한 전자제품을 생산하는 글로벌 기업입니다.",
        "LG전자는 OLED TV와 프리미엄 가전에서의 강세가 지속되고 있어 안정적인 수익을 기대할 수 있습니다.",
        RISK_MEDIUM,
        Region::Domestic,
    ),
    stock(
        "035420",
        "NAVER",
        "인터넷/IT",
        "NAVER는 한국 최대의 인터넷 포털 기업으로, 검색, 쇼핑, 클라우드, 핀테크 등 다양한 사업을 운영하고 있습니다.",
        "NAVER는 한국 인터넷 시장의 강자로 안정적인 수익 구조를 가지고 있습니다.",
        RISK_MEDIUM,
        Region::Domestic,
    ),
    stock(
        "035720",
        "카카오",
        "인터넷/IT",
        "카카오는 카카오톡을 기반으로 한 플랫폼 기업으로, 메신저, 게임, 금융, 모빌리티 등 다양한 사업을 운영하고 있습니다.",
        "카카오는 강력한 플랫폼을 기반으로 다양한 사업을 확장하고 있어 성장 가능성이 높습니다.",
        RISK_MEDIUM,
        Region::Domestic,
    ),
    stock(
        "051910",
        "LG화학",
        "화학",
        "LG화학은 배터리 소재, 석유화학, 첨단소재 등 다양한 화학 사업을 운영하는 기업입니다.",
        "LG화학은 전기차 배터리 소재 시장의 성장과 함께 높은 성장 가능성을 보이고 있습니다.",
        RISK_MEDIUM,
        Region::Domestic,
    ),
    stock(
        "028260",
        "삼성물산",
        "건설/유통",
        "삼성물산은 건설, 유통, 패션 등 다양한 사업을 운영하는 대기업입니다.",
        "삼성물산은 다양한 사업 포트폴리오로 안정적인 수익을 기대할 수 있습니다.",
        RISK_MEDIUM,
        Region::Domestic,
    ),
    stock(
        "006400",
        "삼성SDI",
        "배터리",
        "삼성SDI는 전기차 배터리와 전자재료를 생산하는 기업입니다.",
        "삼성SDI는 전기차 시장의 성장과 함께 높은 성장 가능성을 보이고 있습니다.",
        RISK_HIGH,
        Region::Domestic,
    ),
    stock(
        "003670",
        "포스코홀딩스",
        "철강",
        "포스코홀딩스는 세계적인 철강 기업으로, 고품질 철강 제품을 생산하고 있습니다.",
        "포스코홀딩스는 철강 업황 회복과 친환경 사업 전환으로 장기 성장 가능성이 있습니다.",
        RISK_MEDIUM,
        Region::Domestic,
    ),
    stock(
        "096770",
        "SK이노베이션",
        "에너지/화학",
        "SK이노베이션은 정유, 화학, 배터리 사업을 운영하는 에너지 기업입니다.",
        "SK이노베이션은 배터리 사업의 성장 가능성이 높지만, 정유 업황과 배터리 경쟁에 주의가 필요합니다.",
        RISK_MEDIUM,
        Region::Domestic,
    ),
    stock(
        "017670",
        "SK텔레콤",
        "통신",
        "SK텔레콤은 한국의 주요 통신사로, 이동통신, 인터넷, 미디어 사업을 운영하고 있습니다.",
        "SK텔레콤은 안정적인 통신 수익 구조를 가지고 있어 방어적 투자에 적합합니다.",
        RISK_LOW,
        Region::Domestic,
    ),
    stock(
        "030200",
        "KT",
        "통신",
        "KT는 한국의 주요 통신사로, 이동통신, 인터넷, 미디어 사업을 운영하고 있습니다.",
        "KT는 안정적인 통신 수익 구조를 가지고 있어 방어적 투자에 적합합니다.",
        RISK_LOW,
        Region::Domestic,
    ),
    stock(
        "032830",
        "삼성생명",
        "금융",
        "삼성생명은 한국 최대의 생명보험사로, 안정적인 수익 구조를 가지고 있습니다.",
        "삼성생명은 안정적인 수익 구조와 높은 배당률로 방어적 투자에 적합합니다.",
        RISK_LOW,
        Region::Domestic,
    ),
    stock(
        "055550",
        "신한지주",
        "금융",
        "신한지주는 신한은행을 중심으로 한 금융지주회사로, 은행, 증권, 카드 등 다양한 금융 서비스를 제공하고 있습니다.",
        "신한지주는 안정적인 은행 수익 구조를 가지고 있어 방어적 투자에 적합합니다.",
        RISK_LOW,
        Region::Domestic,
    ),
];

static FAQS: [BaselineFaq; 3] = [
    BaselineFaq {
        question: "주식 투자를 처음 시작하는데 어떻게 해야 하나요?",
        answer: "먼저 주식 용어를 학습하고, 자신의 투자 성향을 파악한 후 적합한 종목을 선택하는 것이 좋습니다. EasyStock의 프로필 진단 기능을 활용해보세요.",
        category: "기초",
    },
    BaselineFaq {
        question: "PER이 낮은 주식이 무조건 좋은 건가요?",
        answer: "PER이 낮다고 무조건 좋은 것은 아닙니다. 업종 평균과 비교하고, 회사의 성장 가능성도 함께 고려해야 합니다.",
        category: "재무지표",
    },
    BaselineFaq {
        question: "언제 주식을 팔아야 하나요?",
        answer: "투자 목적과 전략에 따라 다릅니다. 단기 투자라면 목표 수익률에 도달했을 때, 장기 투자라면 회사의 근본적인 가치가 변했을 때를 고려해보세요.",
        category: "투자전략",
    },
];

/// Full term set inserted into an empty `terms` table.
#[must_use]
pub fn terms() -> &'static [BaselineTerm] {
    &TERMS
}

/// Advanced terms added to installations that hold at most the legacy one.
pub fn advanced_backfill_terms() -> impl Iterator<Item = &'static BaselineTerm> {
    TERMS
        .iter()
        .filter(|item| item.category == CATEGORY_ADVANCED && item.term != LEGACY_ADVANCED_TERM)
}

/// Full stock set (both regions) inserted into an empty `stocks` table.
#[must_use]
pub fn stocks() -> &'static [BaselineStock] {
    &STOCKS
}

pub fn stocks_in_region(region: Region) -> impl Iterator<Item = &'static BaselineStock> {
    STOCKS.iter().filter(move |item| item.region == region)
}

#[must_use]
pub fn faqs() -> &'static [BaselineFaq] {
    &FAQS
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::CATEGORY_DEPRECATED_METRICS;

    #[test]
    fn baseline_sizes_match_catalog() {
        assert_eq!(terms().len(), 21);
        assert_eq!(stocks().len(), 35);
        assert_eq!(stocks_in_region(Region::Domestic).count(), 15);
        assert_eq!(stocks_in_region(Region::Overseas).count(), 20);
        assert_eq!(faqs().len(), 3);
    }

    #[test]
    fn identities_are_unique() {
        let names: BTreeSet<_> = terms().iter().map(|item| item.term).collect();
        assert_eq!(names.len(), terms().len());
        let codes: BTreeSet<_> = stocks().iter().map(|item| item.code).collect();
        assert_eq!(codes.len(), stocks().len());
    }

    #[test]
    fn legacy_term_leads_and_is_excluded_from_backfill() {
        assert_eq!(terms()[0].term, LEGACY_ADVANCED_TERM);
        assert_eq!(terms()[0].category, CATEGORY_ADVANCED);
        assert_eq!(advanced_backfill_terms().count(), 9);
        assert!(advanced_backfill_terms().all(|item| item.term != LEGACY_ADVANCED_TERM));
    }

    #[test]
    fn no_baseline_term_uses_deprecated_category() {
        assert!(terms()
            .iter()
            .all(|item| item.category != CATEGORY_DEPRECATED_METRICS));
    }
}
