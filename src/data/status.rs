use crate::models::metrics::{
    ActionItem, CodeVerification, HealthStatus, NamespaceUsage, OptimizationItem,
    PerformanceMetric, Progress, ProgressLevel, Recommendation, Urgency,
};

/// Pods across the cluster, used for cluster-wide savings.
pub const CLUSTER_POD_TOTAL: u32 = 153;

pub const NAMESPACES: [NamespaceUsage; 9] = [
    ns("emaarhospitality", 8, 69, 15, HealthStatus::Healthy),
    ns("ehgv3", 19, 86, 22, HealthStatus::Moderate),
    ns("cenomi", 12, 74, 18, HealthStatus::Healthy),
    ns("agiv2prod", 15, 78, 20, HealthStatus::Moderate),
    ns("srg", 11, 71, 16, HealthStatus::Healthy),
    ns("atgv2", 14, 82, 19, HealthStatus::Moderate),
    ns("aster", 9, 67, 14, HealthStatus::Healthy),
    ns("salesdemo", 7, 63, 12, HealthStatus::Healthy),
    ns("enova", 13, 75, 17, HealthStatus::Healthy),
];

const fn ns(
    namespace: &'static str,
    cpu_pct: u32,
    memory_pct: u32,
    pods: u32,
    status: HealthStatus,
) -> NamespaceUsage {
    NamespaceUsage {
        namespace,
        cpu_pct,
        memory_pct,
        pods,
        status,
    }
}

const DONE: ProgressLevel = ProgressLevel::Done;
const PARTIAL: ProgressLevel = ProgressLevel::Partial;
const MISSING: ProgressLevel = ProgressLevel::Missing;

pub const OPTIMIZATIONS: [OptimizationItem; 6] = [
    OptimizationItem {
        component: "Database Connection Pools",
        before: Progress::new(MISSING, "Not Optimized"),
        after: Progress::new(DONE, "Implemented"),
        memory_impact_mb: 50,
        implemented: "2024-Q3",
        details: &[
            "pool_size=3 (optimized from default)",
            "max_overflow=5 (controlled scaling)",
            "pool_recycle=600 (connection refresh)",
            "pool_pre_ping=True (health checks)",
        ],
    },
    OptimizationItem {
        component: "Redis Connection Management",
        before: Progress::new(MISSING, "Dual Pools"),
        after: Progress::new(DONE, "Implemented"),
        memory_impact_mb: 22,
        implemented: "2024-Q3",
        details: &[
            "AsyncRedisManager singleton pattern",
            "max_connections=13 (optimized pool)",
            "retry_on_timeout=True (resilience)",
            "Proper lifecycle management",
        ],
    },
    OptimizationItem {
        component: "OCR File Processing",
        before: Progress::new(MISSING, "Memory Leaks"),
        after: Progress::new(DONE, "Implemented"),
        memory_impact_mb: 100,
        implemented: "2024-Q3",
        details: &[
            "asynccontextmanager for file handling",
            "tempfile usage for temporary storage",
            "gc.collect() for explicit cleanup",
            "BytesIO buffer management",
        ],
    },
    OptimizationItem {
        component: "Resource Limits & Requests",
        before: Progress::new(MISSING, "Inadequate"),
        after: Progress::new(DONE, "Implemented"),
        memory_impact_mb: 30,
        implemented: "2024-Q4",
        details: &[
            "CPU requests: 100m-200m",
            "Memory limits: 1500Mi",
            "Consistent across namespaces",
            "Proper resource allocation",
        ],
    },
    OptimizationItem {
        component: "Pod Anti-Affinity",
        before: Progress::new(MISSING, "Missing"),
        after: Progress::new(PARTIAL, "Partial"),
        memory_impact_mb: 0,
        implemented: "Pending",
        details: &[],
    },
    OptimizationItem {
        component: "Monitoring & Alerting",
        before: Progress::new(MISSING, "Basic Only"),
        after: Progress::new(PARTIAL, "Basic"),
        memory_impact_mb: 0,
        implemented: "Pending",
        details: &[],
    },
];

pub const CODE_VERIFICATIONS: [CodeVerification; 5] = [
    CodeVerification {
        file_path: "Dynamics/app/session/session.py",
        optimization: "Database Pool Configuration",
        verified: true,
        reduction: "60MB → 10MB",
    },
    CodeVerification {
        file_path: "Dynamics/app/Utilities/cache.py",
        optimization: "Redis Connection Pooling",
        verified: true,
        reduction: "30MB → 8MB",
    },
    CodeVerification {
        file_path: "Dynamics/app/lifespan_manager.py",
        optimization: "Redis Lifecycle Management",
        verified: true,
        reduction: "Lifecycle Optimized",
    },
    CodeVerification {
        file_path: "Dynamics/app/routers/OCR.py",
        optimization: "OCR Memory Management",
        verified: true,
        reduction: "150MB → 50MB",
    },
    CodeVerification {
        file_path: "Backend/redis.yaml",
        optimization: "Redis Resource Limits",
        verified: true,
        reduction: "Resource Limited",
    },
];

pub const RECOMMENDATIONS: [Recommendation; 4] = [
    Recommendation {
        item: "Pod Anti-Affinity Rules",
        priority: Urgency::High,
        impact: Urgency::Medium,
        effort: Urgency::Low,
        timeline: "1-2 days",
    },
    Recommendation {
        item: "Comprehensive Monitoring",
        priority: Urgency::High,
        impact: Urgency::High,
        effort: Urgency::Medium,
        timeline: "1 week",
    },
    Recommendation {
        item: "Resource Quotas",
        priority: Urgency::Medium,
        impact: Urgency::Medium,
        effort: Urgency::Low,
        timeline: "2-3 days",
    },
    Recommendation {
        item: "Advanced Alerting",
        priority: Urgency::Medium,
        impact: Urgency::High,
        effort: Urgency::Medium,
        timeline: "3-5 days",
    },
];

pub const PERFORMANCE: [PerformanceMetric; 5] = [
    PerformanceMetric {
        metric: "Memory Usage per Pod",
        before: "326MB",
        after: "124MB",
        improvement: "62% reduction",
        rating: "✅ Excellent",
    },
    PerformanceMetric {
        metric: "Database Connection Time",
        before: "150ms",
        after: "45ms",
        improvement: "70% faster",
        rating: "✅ Excellent",
    },
    PerformanceMetric {
        metric: "Redis Operation Latency",
        before: "25ms",
        after: "8ms",
        improvement: "68% faster",
        rating: "✅ Excellent",
    },
    PerformanceMetric {
        metric: "OCR Processing Memory",
        before: "150MB peak",
        after: "50MB peak",
        improvement: "67% reduction",
        rating: "✅ Excellent",
    },
    PerformanceMetric {
        metric: "Overall Stability",
        before: "3 OOM events/week",
        after: "0 OOM events",
        improvement: "100% stable",
        rating: "✅ Perfect",
    },
];

/// Weekly per-pod memory means for the three phases of 2024: before, during
/// and after the optimisation work.
pub const TREND_PHASES: [(usize, f64, f64); 3] = [(26, 320.0, 20.0), (13, 250.0, 15.0), (13, 125.0, 10.0)];

pub const ACTIONS: [ActionItem; 5] = [
    ActionItem {
        action: "Implement Pod Anti-Affinity Rules",
        priority: Urgency::High,
        timeline: "1-2 days",
        owner: "DevOps Team",
        status: "Pending",
    },
    ActionItem {
        action: "Setup Comprehensive Monitoring",
        priority: Urgency::High,
        timeline: "1 week",
        owner: "Platform Team",
        status: "Pending",
    },
    ActionItem {
        action: "Configure Resource Quotas",
        priority: Urgency::Medium,
        timeline: "2-3 days",
        owner: "DevOps Team",
        status: "Pending",
    },
    ActionItem {
        action: "Implement Advanced Alerting",
        priority: Urgency::Medium,
        timeline: "3-5 days",
        owner: "Platform Team",
        status: "Pending",
    },
    ActionItem {
        action: "Performance Validation Testing",
        priority: Urgency::Low,
        timeline: "1 week",
        owner: "QA Team",
        status: "Pending",
    },
];
