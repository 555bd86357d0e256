// Code and manifest excerpts quoted by the status report.

pub const SESSION_POOLS: &str = r#"# Main Application Database Engine
engine = create_engine(
    DATABASE_URL,
    pool_pre_ping=True,
    pool_recycle=600,
    pool_size=int(os.getenv('client_pool_size', 3)),
    max_overflow=5,
    pool_timeout=20,
    isolation_level="READ COMMITTED"
)

# RPA Service Database Engine
rpa_engine = create_engine(
    RPA_DATABASE_URL,
    pool_recycle=600,
    pool_size=2,
    max_overflow=1,
    pool_timeout=20
)"#;

pub const REDIS_MANAGER: &str = r#"class AsyncRedisManager:
    _instance = None
    _redis_pool = None

    def __new__(cls):
        if cls._instance is None:
            cls._instance = super().__new__(cls)
        return cls._instance

    async def get_redis_pool(self):
        if self._redis_pool is None:
            self._redis_pool = redis.asyncio.ConnectionPool.from_url(
                f"redis://{redis_host}:{redis_port}",
                max_connections=13,
                retry_on_timeout=True,
                health_check_interval=30
            )
        return redis.asyncio.Redis(connection_pool=self._redis_pool)"#;

pub const OCR_PROCESSING: &str = r#"@asynccontextmanager
async def managed_file_processing(file_url: str, context: str):
    file_buffer = None
    resp = None
    try:
        # Download file with async context
        async with aiohttp.ClientSession() as session:
            async with session.get(file_url) as resp:
                file_buffer = BytesIO(await resp.read())

        # Process with temporary file
        with tempfile.NamedTemporaryFile(delete=False, suffix='.pdf') as temp_file:
            temp_file.write(file_buffer.getvalue())
            temp_file_path = temp_file.name

        yield temp_file_path

    finally:
        # Explicit cleanup
        if file_buffer:
            file_buffer.close()
        if resp:
            resp.close()
        gc.collect()  # Force garbage collection"#;

pub const REDIS_DEPLOYMENT: &str = r#"apiVersion: apps/v1
kind: Deployment
metadata:
  name: redis
spec:
  template:
    spec:
      containers:
      - name: redis
        image: redis:7-alpine
        resources:
          requests:
            cpu: 100m
            memory: 512Mi
          limits:
            cpu: 200m
            memory: 1Gi
        livenessProbe:
          tcpSocket:
            port: 6379
          initialDelaySeconds: 30
          periodSeconds: 10
        readinessProbe:
          tcpSocket:
            port: 6379
          initialDelaySeconds: 5
          periodSeconds: 5"#;

pub const ANTI_AFFINITY: &str = r#"apiVersion: apps/v1
kind: Deployment
metadata:
  name: server
spec:
  template:
    spec:
      affinity:
        podAntiAffinity:
          preferredDuringSchedulingIgnoredDuringExecution:
          - weight: 100
            podAffinityTerm:
              labelSelector:
                matchExpressions:
                - key: app
                  operator: In
                  values:
                  - server
              topologyKey: kubernetes.io/hostname"#;

pub const MEMORY_ALERTS: &str = r#"groups:
- name: memory-alerts
  rules:
  - alert: HighMemoryUsage
    expr: (container_memory_usage_bytes / container_spec_memory_limit_bytes) > 0.8
    for: 5m
    labels:
      severity: warning
    annotations:
      summary: "High memory usage detected"
      description: "Pod {{ $labels.pod }} memory usage is above 80%"

  - alert: MemoryLeakDetected
    expr: increase(container_memory_usage_bytes[1h]) > 100000000
    for: 10m
    labels:
      severity: critical
    annotations:
      summary: "Potential memory leak detected"
      description: "Pod {{ $labels.pod }} memory increased by >100MB in 1 hour""#;

pub const RESOURCE_QUOTA: &str = r#"apiVersion: v1
kind: ResourceQuota
metadata:
  name: namespace-quota
  namespace: production
spec:
  hard:
    requests.cpu: "4"
    requests.memory: 8Gi
    limits.cpu: "8"
    limits.memory: 16Gi
    pods: "20"
    persistentvolumeclaims: "10""#;

pub const POOL_CONFIG: &str = r#"engine = create_engine(
    DATABASE_URL,
    pool_pre_ping=True,          # Health check connections
    pool_recycle=600,            # Recycle every 10 minutes
    pool_size=3,                 # Optimized pool size
    max_overflow=5,              # Allow burst connections
    pool_timeout=20,             # Connection timeout
    isolation_level="READ COMMITTED"
)"#;

pub const CLEANUP_PATTERN: &str = r#"@asynccontextmanager
async def managed_file_processing(file_url: str):
    file_buffer = None
    try:
        # Acquire resources
        file_buffer = BytesIO(await download_file(file_url))

        with tempfile.NamedTemporaryFile(delete=False) as temp_file:
            temp_file.write(file_buffer.getvalue())
            yield temp_file.name

    finally:
        # Explicit cleanup
        if file_buffer:
            file_buffer.close()
        gc.collect()  # Force garbage collection"#;
